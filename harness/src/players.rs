//! Scripted stand-ins for the people at the keyboard.

use game_core::{Actions, Config, Side, Snapshot};

use crate::config::PlayerScript;

/// Keys a scripted player holds for the paddle on `side` this frame.
pub fn held_actions(script: PlayerScript, side: Side, snap: &Snapshot, config: &Config) -> Actions {
    match script {
        PlayerScript::Idle => Actions::empty(),
        PlayerScript::Tracker => track(side, snap, config),
    }
}

fn track(side: Side, snap: &Snapshot, config: &Config) -> Actions {
    let paddle_y = match side {
        Side::Left => snap.left_y,
        Side::Right => snap.right_y,
    };
    let gap = (snap.ball_y + config.ball_size / 2.0) - (paddle_y + config.paddle_height / 2.0);
    let (up, down) = match side {
        Side::Left => (Actions::MOVE_LEFT_UP, Actions::MOVE_LEFT_DOWN),
        Side::Right => (Actions::MOVE_RIGHT_UP, Actions::MOVE_RIGHT_DOWN),
    };

    // Inside one step the tracker lets go rather than overshoot
    if gap < -config.paddle_speed {
        up
    } else if gap > config.paddle_speed {
        down
    } else {
        Actions::empty()
    }
}
