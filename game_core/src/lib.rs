pub mod components;
pub mod config;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod sim;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use sim::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one frame of ping pong physics
///
/// Motion is a fixed step per call. Pause and reset handling live in
/// [`Simulation::advance`]; this is only the unpaused branch.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    actions: Actions,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Held keys become paddle intents
    ingest_inputs(world, actions);

    // 2. AI paddles chase the ball
    drive_ai_paddles(world, config);

    // 3. Manual paddles move, every paddle is clamped
    move_paddles(world, arena, config);

    // 4. Move ball
    move_ball(world);

    // 5. Walls, then paddles
    check_walls(world, arena, config, events);
    check_paddles(world, arena, config, events);

    // 6. Ball left the arena
    check_scoring(world, arena, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f64) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::DVec2, vel: glam::DVec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
