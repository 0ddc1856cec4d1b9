//! # Ball Store
//!
//! Owns the authoritative ball array and decides how it is (re)populated.
//! The stepper mutates the array in place; a renderer only reads it between
//! steps.

use fastrand::Rng;
use tracing::debug;

use crate::constants::{
    SCALE_MAX, SCALE_MIN, SPAWN_HALF_SPREAD, SPAWN_HEIGHT_RANGE, SPAWN_MIN_HEIGHT,
    SPAWN_SPIN_JITTER, SPAWN_VELOCITY_JITTER,
};
use crate::types::{Ball, Vec3};

#[derive(Clone, Debug, Default)]
pub struct BallStore {
    balls: Vec<Ball>,
}

impl BallStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole array with `count` freshly sampled balls.
    ///
    /// Indices handed out before this call now refer to different balls.
    pub fn reinitialize(&mut self, rng: &mut Rng, count: usize, base_radius: f32, mass_density: f32) {
        self.balls.clear();
        self.balls.reserve(count);
        for _ in 0..count {
            let ball = self.sample_ball(rng, base_radius, mass_density);
            self.balls.push(ball);
        }
        debug!(count, base_radius, mass_density, "ball set reinitialized");
    }

    /// Drop every ball past `count`. Survivors keep their state.
    pub fn truncate(&mut self, count: usize) {
        if count < self.balls.len() {
            debug!(from = self.balls.len(), to = count, "ball set truncated");
            self.balls.truncate(count);
        }
    }

    /// Add a ball by hand and return its index.
    pub fn push(&mut self, ball: Ball) -> usize {
        self.balls.push(ball);
        self.balls.len() - 1
    }

    #[must_use]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    #[must_use]
    pub fn max_speed(&self) -> f32 {
        self.balls.iter().map(Ball::speed).fold(0.0, f32::max)
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Deepest pairwise interpenetration, zero when nothing overlaps.
    #[must_use]
    pub fn max_overlap(&self) -> f32 {
        let mut worst = 0.0_f32;
        for (i, a) in self.balls.iter().enumerate() {
            for b in &self.balls[i + 1..] {
                let overlap = a.radius + b.radius - (b.pos - a.pos).length();
                worst = worst.max(overlap);
            }
        }
        worst
    }

    fn sample_ball(&self, rng: &mut Rng, base_radius: f32, mass_density: f32) -> Ball {
        // Coincident centres would give the contact solver nothing to push along.
        let mut pos = sample_spawn_position(rng);
        while self.balls.iter().any(|b| b.pos == pos) {
            pos = sample_spawn_position(rng);
        }

        let vel = Vec3::new(
            jitter(rng, SPAWN_VELOCITY_JITTER),
            0.0,
            jitter(rng, SPAWN_VELOCITY_JITTER),
        );
        let spin = Vec3::new(
            jitter(rng, SPAWN_SPIN_JITTER),
            jitter(rng, SPAWN_SPIN_JITTER),
            jitter(rng, SPAWN_SPIN_JITTER),
        );
        let scale = SCALE_MIN + rng.f32() * (SCALE_MAX - SCALE_MIN);

        Ball::new(pos, vel, base_radius, scale, mass_density).with_spin(spin)
    }
}

/// Wide horizontal spread, tall staggered column so drops do not all land at once.
fn sample_spawn_position(rng: &mut Rng) -> Vec3 {
    Vec3::new(
        jitter(rng, SPAWN_HALF_SPREAD * 2.0),
        SPAWN_MIN_HEIGHT + rng.f32() * SPAWN_HEIGHT_RANGE,
        jitter(rng, SPAWN_HALF_SPREAD * 2.0),
    )
}

/// Uniform sample in `[-width / 2, width / 2)`.
fn jitter(rng: &mut Rng, width: f32) -> f32 {
    (rng.f32() - 0.5) * width
}
