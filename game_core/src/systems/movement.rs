use hecs::World;

use crate::{AiControlled, Arena, Ball, Config, Paddle, PaddleIntent};

/// Apply held-key intents to manual paddles, then clamp every paddle
///
/// Up is applied before down, so holding both leaves the paddle where it was.
pub fn move_paddles(world: &mut World, arena: &Arena, config: &Config) {
    for (_entity, (paddle, intent, ai)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, Option<&AiControlled>)>()
    {
        if ai.is_none() {
            if intent.up {
                paddle.y -= config.paddle_speed;
            }
            if intent.down {
                paddle.y += config.paddle_speed;
            }
        }
        paddle.y = config.clamp_paddle_y(paddle.y, arena);
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
