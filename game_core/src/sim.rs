//! Owned simulation session
//!
//! [`Simulation`] bundles the ECS world with its resources and exposes the
//! per-frame entry point. A driver calls [`Simulation::advance`] once per
//! rendered frame and reads [`Simulation::snapshot`] to draw.

use glam::DVec2;
use hecs::{Entity, World};

use crate::systems::hard_reset;
use crate::{
    create_ball, create_paddle, step, Actions, AiControlled, Arena, Ball, Config, Events,
    GameRng, Modes, Paddle, Score, Side, Snapshot, Time,
};

pub struct Simulation {
    world: World,
    arena: Arena,
    config: Config,
    time: Time,
    score: Score,
    modes: Modes,
    events: Events,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Simulation {
    /// Fresh session in the centred starting layout
    pub fn new(seed: u64) -> Self {
        let arena = Arena::new();
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut score = Score::new();

        let paddle_y = arena.paddle_spawn_y(config.paddle_height);
        let left = create_paddle(&mut world, Side::Left, paddle_y);
        let right = create_paddle(&mut world, Side::Right, paddle_y);
        let ball = create_ball(&mut world, arena.ball_spawn(config.ball_size), DVec2::ZERO);

        hard_reset(&mut world, &arena, &config, &mut score, &mut rng);

        Self {
            world,
            arena,
            config,
            time: Time::new(),
            score,
            modes: Modes::default(),
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        }
    }

    /// Advance one frame with the actions currently held
    ///
    /// `dt_ms` is recorded but does not scale motion. Pause engages while
    /// `TOGGLE_PAUSE` is held and only `RESET_MATCH` clears it. `HOLD_AI`
    /// hands the right paddle to the AI for the rest of the session.
    pub fn advance(&mut self, actions: Actions, dt_ms: f64) {
        self.events.clear();
        self.time.record(dt_ms);

        if actions.contains(Actions::TOGGLE_PAUSE) && !self.modes.paused {
            self.modes.paused = true;
            tracing::info!(frame = self.time.frame, "paused");
        }
        if actions.contains(Actions::RESET_MATCH) {
            hard_reset(
                &mut self.world,
                &self.arena,
                &self.config,
                &mut self.score,
                &mut self.rng,
            );
            self.modes.paused = false;
            self.events.hard_reset = true;
            tracing::info!(frame = self.time.frame, "match reset");
        }
        if actions.contains(Actions::HOLD_AI)
            && !self.ai_controls_right()
            && self.world.insert_one(self.right, AiControlled).is_ok()
        {
            tracing::info!(frame = self.time.frame, "AI takes the right paddle");
        }

        // The reset frame ends in the centred layout; play resumes next frame
        if !self.modes.paused && !self.events.hard_reset {
            step(
                &mut self.world,
                &self.arena,
                &self.config,
                actions,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
        }

        self.time.frame += 1;
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            frame: self.time.frame,
            left_y: self.paddle_y(Side::Left),
            right_y: self.paddle_y(Side::Right),
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            score_left: self.score.left,
            score_right: self.score.right,
            paused: self.modes.paused,
            ai_right: self.ai_controls_right(),
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.arena.ball_spawn(self.config.ball_size), DVec2::ZERO))
    }

    pub fn paddle_y(&self, side: Side) -> f64 {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .map(|p| p.y)
            .unwrap_or_else(|_| self.arena.paddle_spawn_y(self.config.paddle_height))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.modes.paused
    }

    pub fn ai_controls_right(&self) -> bool {
        self.world.get::<&AiControlled>(self.right).is_ok()
    }

    /// What happened during the latest frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Put the ball at an exact position and velocity
    pub fn place_ball(&mut self, pos: DVec2, vel: DVec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            *ball = Ball::new(pos, vel);
        }
    }

    /// Move a paddle, clamped to the arena
    pub fn place_paddle(&mut self, side: Side, y: f64) {
        let y = self.config.clamp_paddle_y(y, &self.arena);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.paddle_entity(side)) {
            paddle.y = y;
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
