use crate::components::Side;
use crate::map::Arena;
use crate::params::Params;

/// Game configuration
///
/// Always built from [`Params`]; sessions do not tune physics.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_margin: f64,
    pub ai_speed_factor: f64,
    pub ball_size: f64,
    pub ball_speed_start: f64,
    pub ball_speed_max: f64,
    pub ball_accel_on_hit: f64,
    pub spin_factor: f64,
    pub min_horizontal_speed: f64,
    pub horizontal_share: f64,
    pub launch_horizontal_share: f64,
    pub launch_angle_spread: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ball_size: Params::BALL_SIZE,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_accel_on_hit: Params::BALL_ACCEL_ON_HIT,
            spin_factor: Params::SPIN_FACTOR,
            min_horizontal_speed: Params::MIN_HORIZONTAL_SPEED,
            horizontal_share: Params::HORIZONTAL_SHARE,
            launch_horizontal_share: Params::LAUNCH_HORIZONTAL_SHARE,
            launch_angle_spread: Params::LAUNCH_ANGLE_SPREAD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the paddle on `side`
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f64 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => arena.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f64, arena: &Arena) -> f64 {
        arena.clamp_y(y, self.paddle_height)
    }
}
