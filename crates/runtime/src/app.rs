//! Frame loop.
//!
//! Parameter changes only ever land between two steps: the loop drains the
//! reload channel, then steps once with whatever it ended up with.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use physics::{BallTransform, SimDebugInfo, Simulation};
use settings::Settings;
use tracing::info;

/// Frames to run when neither a count nor an open-ended mode is given.
pub const DEFAULT_FRAMES: u64 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Stop after this many frames. `None` runs until the process is stopped.
    pub frames: Option<u64>,
    pub fps: f32,
    /// Sleep so that frames are not produced faster than `fps`.
    pub realtime: bool,
    /// Log a progress line every this many frames. 0 disables it.
    pub log_every: u64,
    /// Overrides the seed from the settings document.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: Some(DEFAULT_FRAMES),
            fps: 60.0,
            realtime: false,
            log_every: 60,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames: u64,
    pub reloads: usize,
    pub info: SimDebugInfo,
    pub transforms: Vec<BallTransform>,
}

/// Work out how many frames to run.
///
/// An explicit count wins, except that 0 means "no limit" when the run is
/// open-ended anyway (watching or realtime). Without a count, open-ended runs
/// have no limit and everything else runs [`DEFAULT_FRAMES`].
#[must_use]
pub fn resolve_frame_limit(frames: Option<u64>, open_ended: bool) -> Option<u64> {
    match frames {
        Some(0) | None if open_ended => None,
        Some(n) => Some(n),
        None => Some(DEFAULT_FRAMES),
    }
}

/// Run the simulation loop.
///
/// `updates` carries reloaded settings from the file watcher. Anything waiting
/// on it is applied before the next step; the latest document wins.
#[must_use]
pub fn run(settings: &Settings, config: &RunConfig, updates: Option<&Receiver<Settings>>) -> RunSummary {
    let seed = config.seed.or(settings.seed);
    let mut sim = seed.map_or_else(Simulation::new, Simulation::with_seed);
    let mut params = settings.to_params();

    let delta = 1.0 / config.fps;
    let frame_duration = if config.realtime {
        Duration::try_from_secs_f32(delta).ok()
    } else {
        None
    };

    info!(
        balls = params.ball_count,
        active = params.active,
        seed = ?seed,
        frames = ?config.frames,
        "starting simulation loop"
    );

    let mut frame = 0_u64;
    let mut reloads = 0;
    loop {
        if config.frames.is_some_and(|limit| frame >= limit) {
            break;
        }
        let frame_start = Instant::now();

        if let Some(rx) = updates {
            for reloaded in rx.try_iter() {
                params = reloaded.to_params();
                reloads += 1;
                info!(
                    frame,
                    balls = params.ball_count,
                    active = params.active,
                    "settings reloaded"
                );
            }
        }

        let report = sim.step(delta, &params);
        frame += 1;

        if config.log_every > 0 && frame % config.log_every == 0 {
            let snapshot = sim.debug_info();
            info!(
                frame,
                balls = snapshot.num_balls,
                max_speed = snapshot.max_speed,
                contacts = report.ball_contacts,
                settled = snapshot.settled,
                "progress"
            );
        }

        if let Some(budget) = frame_duration {
            let elapsed = frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
    }

    let info = sim.debug_info();
    info!(
        frames = frame,
        balls = info.num_balls,
        settled = info.settled,
        max_overlap = info.max_overlap,
        "run finished"
    );

    RunSummary {
        frames: frame,
        reloads,
        info,
        transforms: sim.transforms(),
    }
}
