use glam::DVec2;
use hecs::World;
use rand::Rng;

use crate::{Arena, Ball, Config, GameRng, Paddle, Score};

/// Serve velocity at the start of a rally
///
/// Random horizontal direction with a small vertical component, scaled so the
/// ball always starts at exactly the configured start speed.
pub fn launch_velocity(rng: &mut GameRng, config: &Config) -> DVec2 {
    let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let spread = config.launch_angle_spread;
    let angle = rng.0.gen::<f64>() * 2.0 * spread - spread;

    DVec2::new(dir * config.launch_horizontal_share, angle).normalize() * config.ball_speed_start
}

/// Recenter paddles and ball and serve a fresh ball; scores are untouched
pub fn soft_reset(world: &mut World, arena: &Arena, config: &Config, rng: &mut GameRng) {
    let paddle_y = arena.paddle_spawn_y(config.paddle_height);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = paddle_y;
    }

    let spawn = arena.ball_spawn(config.ball_size);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = Ball::new(spawn, launch_velocity(rng, config));
    }
}

/// Soft reset plus zeroed scores
pub fn hard_reset(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    rng: &mut GameRng,
) {
    soft_reset(world, arena, config, rng);
    score.reset();
}
