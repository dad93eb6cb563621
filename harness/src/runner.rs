//! Fixed-cadence frame loop plus trace recording and replay.

use anyhow::{bail, ensure, Context};
use game_core::{Actions, Score, Side, Simulation, Snapshot};
use proto::{InputFrame, StateFrame, TraceRecord};
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::players::held_actions;

/// What happened over a harness run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub score: Score,
    pub paddle_hits: u64,
    pub wall_hits: u64,
    /// Fastest ball speed seen in any rally.
    pub peak_speed: f64,
    /// Longest run of paddle hits between two points.
    pub longest_rally: u64,
    /// Sum of the frame times reported to the core.
    pub simulated_ms: f64,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: RunSummary,
    /// Present when the config asks for a recording.
    pub trace: Option<Vec<TraceRecord>>,
}

/// Result of replaying a recorded trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub seed: u64,
    pub frames: u64,
    pub states_checked: u64,
}

pub fn state_frame(snap: &Snapshot) -> StateFrame {
    StateFrame {
        frame: snap.frame,
        left_y: snap.left_y,
        right_y: snap.right_y,
        ball_x: snap.ball_x,
        ball_y: snap.ball_y,
        score_left: snap.score_left,
        score_right: snap.score_right,
        paused: snap.paused,
        ai_right: snap.ai_right,
    }
}

/// Drive a fresh simulation for `cfg.frames` frames.
pub fn run(cfg: &HarnessConfig) -> RunOutcome {
    let mut sim = Simulation::new(cfg.seed);
    let mut summary = RunSummary::default();
    let mut trace = cfg
        .record
        .as_ref()
        .map(|_| vec![TraceRecord::Header { seed: cfg.seed }]);
    let mut rally = 0u64;

    info!(seed = cfg.seed, frames = cfg.frames, ai_right = cfg.ai_right, "starting run");

    for frame in 0..cfg.frames {
        let snap = sim.snapshot();
        let mut held = held_actions(cfg.left_player, Side::Left, &snap, sim.config())
            | held_actions(cfg.right_player, Side::Right, &snap, sim.config());
        if cfg.ai_right && frame == 0 {
            held |= Actions::HOLD_AI;
        }
        // The driver reports no elapsed time on its first frame
        let dt_ms = if frame == 0 { 0.0 } else { cfg.frame_ms };

        sim.advance(held, dt_ms);

        if let Some(trace) = trace.as_mut() {
            trace.push(TraceRecord::Input(InputFrame {
                frame,
                actions: held.bits(),
                dt_ms,
            }));
            trace.push(TraceRecord::State(state_frame(&sim.snapshot())));
        }

        let events = sim.events();
        if events.ball_hit_wall {
            summary.wall_hits += 1;
        }
        if events.ball_hit_paddle {
            summary.paddle_hits += 1;
            rally += 1;
            summary.longest_rally = summary.longest_rally.max(rally);
            summary.peak_speed = summary.peak_speed.max(sim.ball().speed());
        }
        if let Some(side) = events.scored() {
            debug!(frame, ?side, rally, dt_ms = sim.time().dt_ms, "rally over");
            rally = 0;
        }
    }

    summary.frames = cfg.frames;
    summary.score = sim.score();
    summary.simulated_ms = sim.time().now_ms;
    info!(
        left = summary.score.left,
        right = summary.score.right,
        paddle_hits = summary.paddle_hits,
        peak_speed = summary.peak_speed,
        simulated_ms = summary.simulated_ms,
        "run complete"
    );

    RunOutcome { summary, trace }
}

/// Re-feed recorded inputs and check every recorded state matches.
pub fn replay(records: &[TraceRecord]) -> anyhow::Result<ReplayReport> {
    let seed = match records.first() {
        Some(TraceRecord::Header { seed }) => *seed,
        Some(other) => bail!("trace must start with a header, found {:?}", other),
        None => bail!("trace is empty"),
    };

    let mut sim = Simulation::new(seed);
    let mut report = ReplayReport {
        seed,
        frames: 0,
        states_checked: 0,
    };

    // Every input is followed by exactly one state
    let mut awaiting_state = false;

    for record in &records[1..] {
        match record {
            TraceRecord::Header { .. } => bail!("unexpected second header"),
            TraceRecord::Input(input) => {
                ensure!(
                    !awaiting_state,
                    "frame {} has no recorded state",
                    report.frames.saturating_sub(1)
                );
                ensure!(
                    input.frame == report.frames,
                    "input for frame {} arrived at frame {}",
                    input.frame,
                    report.frames
                );
                sim.advance(Actions::from_bits_truncate(input.actions), input.dt_ms);
                report.frames += 1;
                awaiting_state = true;
            }
            TraceRecord::State(expected) => {
                ensure!(
                    awaiting_state,
                    "state for frame {} has no matching input",
                    expected.frame
                );
                let actual = state_frame(&sim.snapshot());
                ensure!(
                    actual == *expected,
                    "replay diverged at frame {}: expected {:?}, got {:?}",
                    expected.frame,
                    expected,
                    actual
                );
                report.states_checked += 1;
                awaiting_state = false;
            }
        }
    }
    ensure!(
        !awaiting_state,
        "trace ends without a state for frame {}",
        report.frames.saturating_sub(1)
    );

    info!(seed, frames = report.frames, states = report.states_checked, "replay matched");
    Ok(report)
}

/// Read a COBS-framed trace file and replay it.
pub fn replay_file(path: &str) -> anyhow::Result<ReplayReport> {
    let bytes = std::fs::read(path).with_context(|| format!("read trace {path}"))?;
    let records = proto::decode_trace(bytes).with_context(|| format!("decode trace {path}"))?;
    replay(&records)
}

/// Write a trace as a COBS-framed file.
pub fn write_trace(path: &str, trace: &[TraceRecord]) -> anyhow::Result<()> {
    let bytes = proto::encode_trace(trace).context("encode trace")?;
    std::fs::write(path, bytes).with_context(|| format!("write trace {path}"))?;
    Ok(())
}
