use hecs::World;

use crate::components::*;
use crate::input::Actions;

/// Copy held movement actions onto each paddle's intent
pub fn ingest_inputs(world: &mut World, actions: Actions) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let (up, down) = match paddle.side {
            Side::Left => actions.left_dir(),
            Side::Right => actions.right_dir(),
        };
        intent.up = up;
        intent.down = down;
    }
}
