//! Session configuration for the headless harness.
//!
//! Physics constants are fixed in the core; this only covers how a session
//! is driven: seed, length, frame spacing, who controls each paddle.

use serde::{Deserialize, Serialize};

/// How a paddle is driven by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayerScript {
    /// Never presses a key.
    #[default]
    Idle,
    /// Holds up/down to keep the paddle centre on the ball centre.
    Tracker,
}

/// Root configuration for one harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Seed handed to the simulation's serve RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of frames to advance.
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Nominal frame spacing reported to the core, in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f64,
    /// Hold the AI key on the first frame.
    #[serde(default)]
    pub ai_right: bool,
    #[serde(default = "default_left_player")]
    pub left_player: PlayerScript,
    #[serde(default)]
    pub right_player: PlayerScript,
    /// Write a trace of every frame to this path.
    #[serde(default)]
    pub record: Option<String>,
}

fn default_seed() -> u64 {
    12345
}

fn default_frames() -> u64 {
    3600
}

fn default_frame_ms() -> f64 {
    1000.0 / 60.0
}

fn default_left_player() -> PlayerScript {
    PlayerScript::Tracker
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frames: default_frames(),
            frame_ms: default_frame_ms(),
            ai_right: false,
            left_player: default_left_player(),
            right_player: PlayerScript::Idle,
            record: None,
        }
    }
}

impl HarnessConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
