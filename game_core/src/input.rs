//! Logical control actions held during a frame
//!
//! Raw key capture happens upstream; callers build a fresh [`Actions`] set
//! every frame from whatever is currently held.

bitflags::bitflags! {
    /// Set of actions held this frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Actions: u8 {
        const MOVE_LEFT_UP = 1 << 0;
        const MOVE_LEFT_DOWN = 1 << 1;
        const MOVE_RIGHT_UP = 1 << 2;
        const MOVE_RIGHT_DOWN = 1 << 3;
        const TOGGLE_PAUSE = 1 << 4;
        const RESET_MATCH = 1 << 5;
        const HOLD_AI = 1 << 6;
    }
}

impl Actions {
    /// Up/down pair for the left paddle
    pub fn left_dir(self) -> (bool, bool) {
        (
            self.contains(Actions::MOVE_LEFT_UP),
            self.contains(Actions::MOVE_LEFT_DOWN),
        )
    }

    /// Up/down pair for the right paddle
    pub fn right_dir(self) -> (bool, bool) {
        (
            self.contains(Actions::MOVE_RIGHT_UP),
            self.contains(Actions::MOVE_RIGHT_DOWN),
        )
    }
}
