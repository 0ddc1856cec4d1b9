#![deny(clippy::all, clippy::pedantic)]
//! # Pile Runtime
//!
//! Runs the ball pile headless. Settings come from a JSON file (or the
//! defaults); with `--watch` the file is reloaded whenever it changes.

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Result};
use clap::Parser;
use runtime::app::{self, resolve_frame_limit, RunConfig};
use runtime::{dump, watcher};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "pile_runtime", about = "Drop a pile of balls and let it settle")]
struct Args {
    /// Settings JSON file. Defaults are used when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Frames to simulate. 0 runs until stopped with --watch or --realtime.
    #[arg(long)]
    frames: Option<u64>,
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
    /// Reload the settings file when it changes.
    #[arg(long, requires = "settings")]
    watch: bool,
    /// Pace frames to --fps instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Write the final transforms to this file as JSON.
    #[arg(long)]
    dump: Option<PathBuf>,
    /// Spawn seed, overriding the settings file.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive number, got {}", args.fps);
    }

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let (tx, rx) = mpsc::channel();
    let _settings_watcher = match &args.settings {
        Some(path) if args.watch => Some(watcher::start(path, tx)?),
        _ => None,
    };

    let config = RunConfig {
        frames: resolve_frame_limit(args.frames, args.watch || args.realtime),
        fps: args.fps,
        realtime: args.realtime,
        log_every: args.log_every,
        seed: args.seed,
    };
    let summary = app::run(&settings, &config, Some(&rx));

    if let Some(path) = &args.dump {
        dump::write_transforms(path, &summary.transforms)?;
    }
    Ok(())
}
