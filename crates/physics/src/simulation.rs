//! # Simulation
//!
//! Ties the ball store to the stepper and owns the lifecycle: when the ball
//! set is spawned, truncated or left alone as parameters change between
//! frames.

use fastrand::Rng;
use tracing::debug;

use crate::constants::REST_VELOCITY_THRESHOLD;
use crate::params::{SimParams, SpawnKey};
use crate::stepper::{PhysicsStepper, StepReport};
use crate::store::BallStore;
use crate::types::{Ball, BallTransform};

/// What [`Simulation::sync`] did to the ball set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Simulation is inactive; nothing was touched.
    Idle,
    /// Ball set already matches the parameters.
    Unchanged,
    /// Ball set was replaced wholesale.
    Reinitialized,
    /// Ball count went down; trailing balls were dropped.
    Truncated,
}

/// Snapshot for logging and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimDebugInfo {
    pub num_balls: usize,
    pub active: bool,
    pub frame: u64,
    pub last_step: StepReport,
    pub max_speed: f32,
    pub kinetic_energy: f32,
    pub max_overlap: f32,
    pub settled: bool,
}

/// The single owner of the ball array.
pub struct Simulation {
    store: BallStore,
    rng: Rng,
    spawned_from: Option<SpawnKey>,
    was_active: bool,
    frame: u64,
    last_step: StepReport,
}

impl Simulation {
    /// Create an empty simulation seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Create an empty simulation with a reproducible spawn sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    fn with_rng(rng: Rng) -> Self {
        Self {
            store: BallStore::new(),
            rng,
            spawned_from: None,
            was_active: false,
            frame: 0,
            last_step: StepReport::default(),
        }
    }

    /// Bring the ball set in line with `params`.
    ///
    /// Inactive: nothing is touched. Turning active, or a change of base
    /// radius or density, respawns everything. A smaller count while active
    /// truncates and keeps the survivors; a larger count respawns.
    pub fn sync(&mut self, params: &SimParams) -> SyncOutcome {
        if !params.active {
            if self.was_active {
                debug!("simulation deactivated");
            }
            self.was_active = false;
            return SyncOutcome::Idle;
        }

        let key = params.spawn_key();
        let outcome = match self.spawned_from {
            _ if !self.was_active => SyncOutcome::Reinitialized,
            Some(prev) if prev == key => SyncOutcome::Unchanged,
            Some(prev) if prev.same_shape(&key) && key.count < prev.count => SyncOutcome::Truncated,
            _ => SyncOutcome::Reinitialized,
        };

        match outcome {
            SyncOutcome::Reinitialized => {
                if !self.was_active {
                    debug!(count = key.count, "simulation activated");
                }
                self.store
                    .reinitialize(&mut self.rng, key.count, key.base_radius, key.mass_density);
                self.frame = 0;
            }
            SyncOutcome::Truncated => self.store.truncate(key.count),
            SyncOutcome::Unchanged | SyncOutcome::Idle => {}
        }

        self.spawned_from = Some(key);
        self.was_active = true;
        outcome
    }

    /// Apply lifecycle changes, then advance one frame.
    ///
    /// While inactive this never touches the ball array.
    pub fn step(&mut self, delta: f32, params: &SimParams) -> StepReport {
        if self.sync(params) == SyncOutcome::Idle {
            return StepReport::default();
        }
        self.last_step = PhysicsStepper::step(self.store.balls_mut(), delta, params);
        self.frame += 1;
        self.last_step
    }

    /// Renderer-facing transforms, one per live ball in index order.
    /// Empty while inactive.
    #[must_use]
    pub fn transforms(&self) -> Vec<BallTransform> {
        let mut out = Vec::with_capacity(self.store.len());
        self.write_transforms(&mut out);
        out
    }

    /// Like [`Simulation::transforms`] but reuses the caller's buffer.
    pub fn write_transforms(&self, out: &mut Vec<BallTransform>) {
        out.clear();
        if self.was_active {
            out.extend(self.store.balls().iter().map(Ball::transform));
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.was_active
    }

    /// Every ball is slower than the rest threshold.
    ///
    /// This only turns true when a floor bounce from rest lands under the
    /// snap threshold, i.e. `gravity * GRAVITY_SCALE * bounciness < 0.05`.
    /// Above that (the defaults give 0.075) a ball lying on the floor hops
    /// between zero and that speed on alternate frames and a pile never
    /// reports settled, even though it stays on the floor.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.store.max_speed() < REST_VELOCITY_THRESHOLD
    }

    #[must_use]
    pub fn balls(&self) -> &[Ball] {
        self.store.balls()
    }

    /// Direct access to the store, for hosts that place balls by hand.
    ///
    /// Only meaningful once the simulation is active: activation respawns
    /// the whole set. Balls pushed here are kept until the next respawn,
    /// whatever the configured count says.
    pub fn store_mut(&mut self) -> &mut BallStore {
        &mut self.store
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn debug_info(&self) -> SimDebugInfo {
        SimDebugInfo {
            num_balls: self.store.len(),
            active: self.was_active,
            frame: self.frame,
            last_step: self.last_step,
            max_speed: self.store.max_speed(),
            kinetic_energy: self.store.kinetic_energy(),
            max_overlap: self.store.max_overlap(),
            settled: self.is_settled(),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
