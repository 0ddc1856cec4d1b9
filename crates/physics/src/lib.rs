#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pile Physics
//!
//! A small rigid-sphere simulation that drops a batch of balls from height
//! and lets them settle into a resting pile. It is tuned for a plausible look
//! at 60 Hz, not for physical accuracy.
//!
//! ## Key Components
//!
//! -   **[`BallStore`]** owns every ball's position, velocity, spin, radius and
//!     mass, and knows how to spawn a fresh set.
//! -   **[`PhysicsStepper`]** advances a ball set by one frame: gravity,
//!     floor and walls, then an iterative mass-weighted pairwise contact
//!     solver.
//! -   **[`Simulation`]** owns a store, follows the activation flag and the
//!     spawn parameters between frames, and produces the [`BallTransform`]s a
//!     renderer consumes.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{SimParams, Simulation};
//!
//! let mut sim = Simulation::with_seed(1);
//! let params = SimParams { active: true, ball_count: 8, ..SimParams::default() };
//!
//! for _ in 0..120 {
//!     sim.step(1.0 / 60.0, &params);
//! }
//! assert_eq!(sim.transforms().len(), 8);
//! ```

pub mod collision;
pub mod constants;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod stepper;
pub mod store;
pub mod types;

pub use params::{Arena, SimParams, SpawnKey, TimeMode};
pub use simulation::{SimDebugInfo, Simulation, SyncOutcome};
pub use stepper::{PhysicsStepper, StepReport};
pub use store::BallStore;
pub use types::{Ball, BallTransform, Vec3};
