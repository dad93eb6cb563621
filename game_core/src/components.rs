use glam::DVec2;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign of a ball travelling away from this side
    pub fn outward(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f64, // top edge, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f64) -> Self {
        Self { side, y }
    }
}

/// Held movement keys for a paddle this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle steered by the chase AI instead of held keys
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Ball component - square, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn center_y(&self, size: f64) -> f64 {
        self.pos.y + size / 2.0
    }
}
