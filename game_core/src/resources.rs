use crate::components::Side;

/// Frame timing as reported by the driver
///
/// Kept for the HUD and diagnostics; motion is per-frame and never reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt_ms: f64,  // Elapsed milliseconds reported for the latest frame
    pub now_ms: f64, // Sum of all reported frame times
    pub frame: u64,  // Number of completed advance calls
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, dt_ms: f64) {
        self.dt_ms = dt_ms;
        self.now_ms += dt_ms;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Session toggles that sit outside the physics state
#[derive(Debug, Clone, Copy, Default)]
pub struct Modes {
    pub paused: bool,
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub const DEFAULT_SEED: u64 = 12345;

    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub hard_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}
