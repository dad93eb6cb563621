/// Read-only view of the simulation handed to the drawing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub frame: u64,
    pub left_y: f64,
    pub right_y: f64,
    pub ball_x: f64,
    pub ball_y: f64,
    pub score_left: u32,
    pub score_right: u32,
    pub paused: bool,
    pub ai_right: bool,
}
