//! Headless driver for the ping pong simulation.
//!
//! Stands in for the render/input loop: it builds the held-action set each
//! frame from scripted players, advances the core at a fixed cadence, and can
//! record the session as a trace and verify a trace by replaying it.

pub mod config;
pub mod players;
pub mod runner;

pub use config::{HarnessConfig, PlayerScript};
pub use runner::{replay, replay_file, run, write_trace, ReplayReport, RunOutcome, RunSummary};
