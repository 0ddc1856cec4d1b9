//! Tuning constants.
//!
//! These are fake-physics knobs picked for a stable-looking pile at 60 Hz,
//! not physical quantities. Retuning any of them changes the look of a drop.

/// Converts the external gravity knob into a per-frame velocity change.
pub const GRAVITY_SCALE: f32 = 0.15;

/// Vertical speed below which a floor bounce is snapped to exactly zero.
pub const REST_VELOCITY_THRESHOLD: f32 = 0.05;

/// Scales the friction knob into per-contact horizontal damping on the floor.
pub const FLOOR_FRICTION_SCALE: f32 = 0.1;

/// Damping applied to the blended velocity of two touching balls.
pub const CONTACT_VELOCITY_DAMPING: f32 = 0.9;

/// Fraction of horizontal speed kept (and reversed) when a ball hits a wall.
pub const WALL_RESTITUTION: f32 = 0.5;

/// Passes over all ball pairs per step.
///
/// Three passes do not fully separate a stack that lands at speed. For
/// columns up to 5 deep at gravity ≤ 1 the worst overlap seen during landing
/// stays within 10% of the smaller radius, and a resting stack is back under
/// 1e-5 within a few frames.
pub const SOLVER_ITERATIONS: usize = 3;

/// Squared centre distance below which a pair is skipped (coincident centres).
pub const CONTACT_EPSILON_SQUARED: f32 = 0.0001;

/// World height of the floor plane.
pub const FLOOR_Y: f32 = -3.0;

/// Walls sit at `x = ±WALL_HALF_X`.
pub const WALL_HALF_X: f32 = 25.0;

/// Walls sit at `z = ±WALL_HALF_Z`.
pub const WALL_HALF_Z: f32 = 15.0;

/// Frame rate the per-frame constants above were tuned for.
pub const REFERENCE_HZ: f32 = 60.0;

// Spawn volume and jitter.
pub const SPAWN_HALF_SPREAD: f32 = 10.0;
pub const SPAWN_MIN_HEIGHT: f32 = 15.0;
pub const SPAWN_HEIGHT_RANGE: f32 = 80.0;
pub const SPAWN_VELOCITY_JITTER: f32 = 0.1;
pub const SPAWN_SPIN_JITTER: f32 = 0.1;
pub const SCALE_MIN: f32 = 0.8;
pub const SCALE_MAX: f32 = 1.2;
