//! Headless simulation harness CLI.
//!
//! Usage:
//!   cargo run -p sim_harness -- [--config run.json] [--frames 3600] [--seed 12345]
//!                               [--ai] [--record out.trace]
//!   cargo run -p sim_harness -- --replay out.trace

use std::env;

use anyhow::Context;
use sim_harness::{replay_file, run, write_trace, HarnessConfig};
use tracing::info;

struct Args {
    config: HarnessConfig,
    replay: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = env::args().collect();

    // The config file is the base; flags override it
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a path")?;
            let text = std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
            HarnessConfig::from_json_str(&text).with_context(|| format!("parse config {path}"))?
        }
        None => HarnessConfig::default(),
    };
    let mut replay = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" if i + 1 < args.len() => {
                config.frames = args[i + 1].parse().context("--frames")?;
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                config.seed = args[i + 1].parse().context("--seed")?;
                i += 2;
            }
            "--record" if i + 1 < args.len() => {
                config.record = Some(args[i + 1].clone());
                i += 2;
            }
            "--replay" if i + 1 < args.len() => {
                replay = Some(args[i + 1].clone());
                i += 2;
            }
            "--ai" => {
                config.ai_right = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    Ok(Args { config, replay })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args()?;

    if let Some(path) = args.replay {
        let report = replay_file(&path)?;
        println!(
            "replay ok: seed {} | {} frames | {} states checked",
            report.seed, report.frames, report.states_checked
        );
        return Ok(());
    }

    let outcome = run(&args.config);
    if let (Some(path), Some(trace)) = (&args.config.record, &outcome.trace) {
        write_trace(path, trace)?;
        info!(%path, records = trace.len(), "trace written");
    }

    let s = outcome.summary;
    println!(
        "{} frames ({:.0} ms) | score {} - {} | paddle hits {} | wall hits {} | longest rally {} | peak speed {:.2}",
        s.frames,
        s.simulated_ms,
        s.score.left,
        s.score.right,
        s.paddle_hits,
        s.wall_hits,
        s.longest_rally,
        s.peak_speed
    );
    Ok(())
}
