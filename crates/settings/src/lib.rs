#![deny(clippy::all, clippy::pedantic)]
//! # Pile Settings
//!
//! The configuration side of the simulation. A settings document carries the
//! knobs a control panel exposes (ball count, gravity, bounciness, friction,
//! mass, size, the activation flag) as JSON; [`Settings::to_params`] turns
//! it into the [`physics::SimParams`] the core consumes.
//!
//! The core does not validate its inputs, so all clamping happens here:
//! negative counts become zero, bounciness and friction are pinned to
//! `[0, 1]`, radius and density are kept positive, and non-finite numbers
//! fall back to their defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use physics::constants::REFERENCE_HZ;
use physics::{Arena, SimParams, TimeMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Upper bound on the ball count. The contact solver is O(n²).
pub const MAX_BALLS: usize = 256;

/// Smallest radius, density or arena half extent a document may ask for.
pub const MIN_EXTENT: f32 = 1e-3;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the host's frame delta should be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimeModeSettings {
    #[default]
    PerFrame,
    #[serde(rename_all = "camelCase")]
    Scaled {
        #[serde(default = "default_reference_hz")]
        reference_hz: f32,
    },
}

fn default_reference_hz() -> f32 {
    REFERENCE_HZ
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArenaSettings {
    pub floor_y: f32,
    pub half_x: f32,
    pub half_z: f32,
    pub wall_restitution: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        let arena = Arena::default();
        Self {
            floor_y: arena.floor_y,
            half_x: arena.half_x,
            half_z: arena.half_z,
            wall_restitution: arena.wall_restitution,
        }
    }
}

/// A settings document. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Signed so that a negative count parses and can be clamped.
    pub ball_count: i64,
    pub gravity: f32,
    pub bounciness: f32,
    pub friction: f32,
    /// Mass density: a ball weighs `radius³ × mass`.
    pub mass: f32,
    pub scale: f32,
    pub segment_outer_radius: f32,
    pub active: bool,
    /// Fixed spawn seed. `None` draws from entropy.
    pub seed: Option<u64>,
    pub time_mode: TimeModeSettings,
    pub arena: ArenaSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let params = SimParams::default();
        Self {
            ball_count: i64::try_from(params.ball_count).unwrap_or(0),
            gravity: params.gravity,
            bounciness: params.bounciness,
            friction: params.friction,
            mass: params.mass_density,
            scale: 1.0,
            segment_outer_radius: params.base_radius,
            active: true,
            seed: None,
            time_mode: TimeModeSettings::default(),
            arena: ArenaSettings::default(),
        }
    }
}

impl FromStr for Settings {
    type Err = SettingsError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Settings {
    /// Read and parse a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read and
    /// [`SettingsError::Parse`] if it is not a valid settings document.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        json.parse()
    }

    /// Radius a ball has before its random size factor is applied.
    #[must_use]
    pub fn base_radius(&self) -> f32 {
        self.scale * self.segment_outer_radius
    }

    /// Clamp the document into parameters the core can run with.
    #[must_use]
    pub fn to_params(&self) -> SimParams {
        let defaults = SimParams::default();
        let ball_count = match usize::try_from(self.ball_count) {
            Ok(n) if n <= MAX_BALLS => n,
            Ok(_) => {
                warn!(requested = self.ball_count, max = MAX_BALLS, "ball count clamped");
                MAX_BALLS
            }
            Err(_) => {
                warn!(requested = self.ball_count, "negative ball count clamped to 0");
                0
            }
        };

        SimParams {
            ball_count,
            gravity: clamp_knob("gravity", self.gravity, 0.0, f32::MAX, defaults.gravity),
            bounciness: clamp_knob("bounciness", self.bounciness, 0.0, 1.0, defaults.bounciness),
            friction: clamp_knob("friction", self.friction, 0.0, 1.0, defaults.friction),
            mass_density: clamp_knob("mass", self.mass, MIN_EXTENT, f32::MAX, defaults.mass_density),
            base_radius: clamp_knob("baseRadius", self.base_radius(), MIN_EXTENT, f32::MAX, defaults.base_radius),
            active: self.active,
            time_mode: self.time_mode.to_time_mode(),
            arena: self.arena.to_arena(),
        }
    }
}

impl TimeModeSettings {
    #[must_use]
    pub fn to_time_mode(self) -> TimeMode {
        match self {
            TimeModeSettings::PerFrame => TimeMode::PerFrame,
            TimeModeSettings::Scaled { reference_hz } => TimeMode::Scaled {
                reference_hz: clamp_knob("referenceHz", reference_hz, 1.0, f32::MAX, REFERENCE_HZ),
            },
        }
    }
}

impl ArenaSettings {
    #[must_use]
    pub fn to_arena(&self) -> Arena {
        let defaults = Arena::default();
        Arena {
            floor_y: clamp_knob("floorY", self.floor_y, f32::MIN, f32::MAX, defaults.floor_y),
            half_x: clamp_knob("halfX", self.half_x, MIN_EXTENT, f32::MAX, defaults.half_x),
            half_z: clamp_knob("halfZ", self.half_z, MIN_EXTENT, f32::MAX, defaults.half_z),
            wall_restitution: clamp_knob(
                "wallRestitution",
                self.wall_restitution,
                0.0,
                1.0,
                defaults.wall_restitution,
            ),
        }
    }
}

/// Pin `value` into `[lo, hi]`; non-finite values take `fallback`.
fn clamp_knob(name: &str, value: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        warn!(knob = name, "non-finite value replaced by default {fallback}");
        return fallback;
    }
    let clamped = value.clamp(lo, hi);
    if clamped.to_bits() != value.to_bits() {
        warn!(knob = name, requested = value, used = clamped, "value clamped");
    }
    clamped
}
