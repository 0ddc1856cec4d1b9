//! Per-frame parameters supplied by the host.
//!
//! The core never validates these. Hosts clamp them before they arrive (see
//! the `settings` crate); out-of-range values are undefined behaviour by
//! contract, not a handled error.

use crate::constants::{FLOOR_Y, REFERENCE_HZ, WALL_HALF_X, WALL_HALF_Z, WALL_RESTITUTION};

/// How the `delta` handed to a step is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum TimeMode {
    /// Every call is one reference frame and `delta` is ignored.
    #[default]
    PerFrame,
    /// Motion is scaled by `delta * reference_hz` reference frames.
    Scaled { reference_hz: f32 },
}

impl TimeMode {
    /// Number of reference frames a step of `delta` seconds represents.
    #[must_use]
    pub fn frame_factor(self, delta: f32) -> f32 {
        match self {
            TimeMode::PerFrame => 1.0,
            TimeMode::Scaled { reference_hz } => delta * reference_hz,
        }
    }

    #[must_use]
    pub fn scaled() -> Self {
        TimeMode::Scaled {
            reference_hz: REFERENCE_HZ,
        }
    }
}

/// Floor and side walls that keep the pile in view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arena {
    pub floor_y: f32,
    pub half_x: f32,
    pub half_z: f32,
    pub wall_restitution: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            floor_y: FLOOR_Y,
            half_x: WALL_HALF_X,
            half_z: WALL_HALF_Z,
            wall_restitution: WALL_RESTITUTION,
        }
    }
}

/// Knobs read by the simulation every frame. Any of them may change between
/// frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimParams {
    pub ball_count: usize,
    pub gravity: f32,
    /// Fraction of vertical speed kept after a floor bounce, in `[0, 1]`.
    pub bounciness: f32,
    /// Floor friction in `[0, 1]`.
    pub friction: f32,
    pub mass_density: f32,
    pub base_radius: f32,
    pub active: bool,
    pub time_mode: TimeMode,
    pub arena: Arena,
}

impl SimParams {
    /// The part of the parameters that decides what the ball set looks like.
    #[must_use]
    pub fn spawn_key(&self) -> SpawnKey {
        SpawnKey {
            count: self.ball_count,
            base_radius: self.base_radius,
            mass_density: self.mass_density,
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            ball_count: 20,
            gravity: 1.0,
            bounciness: 0.5,
            friction: 0.5,
            mass_density: 1.0,
            base_radius: 1.0,
            active: false,
            time_mode: TimeMode::default(),
            arena: Arena::default(),
        }
    }
}

/// Inputs a ball set was spawned from. A change in any of them (while
/// active) means the set has to be rebuilt or truncated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnKey {
    pub count: usize,
    pub base_radius: f32,
    pub mass_density: f32,
}

impl SpawnKey {
    /// Same radius and density, only the count differs.
    #[must_use]
    pub fn same_shape(&self, other: &SpawnKey) -> bool {
        self.base_radius.to_bits() == other.base_radius.to_bits()
            && self.mass_density.to_bits() == other.mass_density.to_bits()
    }
}
