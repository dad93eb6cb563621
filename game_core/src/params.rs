/// Game tuning parameters for ping pong
///
/// Motion values are per-frame steps, not per-second rates: paddle and ball
/// advance by these amounts once per `advance` call regardless of frame time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 12.0;
    pub const PADDLE_HEIGHT: f64 = 90.0;
    pub const PADDLE_SPEED: f64 = 7.0; // units per frame
    pub const PADDLE_MARGIN: f64 = 30.0; // gap between arena edge and paddle
    pub const AI_SPEED_FACTOR: f64 = 0.95;

    // Ball
    pub const BALL_SIZE: f64 = 12.0;
    pub const BALL_SPEED_START: f64 = 5.0;
    pub const BALL_SPEED_MAX: f64 = 13.0;
    pub const BALL_ACCEL_ON_HIT: f64 = 0.35; // added to speed on each paddle hit
    pub const SPIN_FACTOR: f64 = 4.0; // vertical kick per unit of impact offset

    // Paddle hit shaping
    pub const MIN_HORIZONTAL_SPEED: f64 = 2.5;
    pub const HORIZONTAL_SHARE: f64 = 0.7;

    // Serve
    pub const LAUNCH_HORIZONTAL_SHARE: f64 = 0.85;
    pub const LAUNCH_ANGLE_SPREAD: f64 = 0.3; // vertical share drawn from [-0.3, 0.3)
}
