use hecs::World;

use crate::{AiControlled, Ball, Config, Paddle};

/// Next top edge for a paddle chasing the ball
///
/// Aims the paddle centre at the ball centre. Holds still once the gap is
/// within one manual step, otherwise moves a slightly slower step toward it,
/// so the paddle hovers around the target instead of settling on it.
pub fn chase_step(paddle_y: f64, ball_y: f64, config: &Config) -> f64 {
    let target = ball_y - config.paddle_height / 2.0 + config.ball_size / 2.0;
    let gap = target - paddle_y;
    if gap.abs() > config.paddle_speed {
        paddle_y + gap.signum() * config.paddle_speed * config.ai_speed_factor
    } else {
        paddle_y
    }
}

/// Steer every AI-controlled paddle toward the ball
pub fn drive_ai_paddles(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);
    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, _ai)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        paddle.y = chase_step(paddle.y, ball_y, config);
    }
}
