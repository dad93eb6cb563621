use hecs::World;

use super::reset::soft_reset;
use crate::{Arena, Ball, Config, Events, GameRng, Score, Side};

/// Award a point when the ball fully leaves either end, then serve again
///
/// Returns the side that scored. The soft reset happens in the same frame.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.pos.x + config.ball_size < 0.0 {
            scorer = Some(Side::Right);
        } else if ball.pos.x > arena.width {
            scorer = Some(Side::Left);
        }
    }

    let side = scorer?;
    score.increment(side);
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    tracing::info!(?side, left = score.left, right = score.right, "point scored");

    soft_reset(world, arena, config, rng);
    Some(side)
}
