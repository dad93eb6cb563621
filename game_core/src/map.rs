use glam::DVec2;

use crate::params::Params;

/// Fixed playing field, origin at the top-left corner with y growing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner that centres a square ball of `ball_size`
    pub fn ball_spawn(&self, ball_size: f64) -> DVec2 {
        self.center() - DVec2::splat(ball_size / 2.0)
    }

    /// Top edge that centres a paddle of `paddle_height` vertically
    pub fn paddle_spawn_y(&self, paddle_height: f64) -> f64 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Clamp a top-edge coordinate so an object of `extent` stays inside
    pub fn clamp_y(&self, y: f64, extent: f64) -> f64 {
        y.max(0.0).min(self.height - extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_points_are_centered() {
        let arena = Arena::new();
        assert_eq!(arena.ball_spawn(12.0), DVec2::new(394.0, 244.0));
        assert_eq!(arena.paddle_spawn_y(90.0), 205.0);
    }

    #[test]
    fn test_clamp_y() {
        let arena = Arena::new();
        assert_eq!(arena.clamp_y(-3.0, 90.0), 0.0);
        assert_eq!(arena.clamp_y(480.0, 90.0), 410.0);
        assert_eq!(arena.clamp_y(100.0, 90.0), 100.0);
    }
}
