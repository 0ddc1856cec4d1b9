//! # Physics Stepper
//!
//! Advances a ball set by one frame. Holds no state between frames: a step is
//! a function of the balls, the frame delta and the current parameters.
//!
//! Order inside a step matters for stability:
//!
//! 1. gravity, move, floor and walls, per ball
//! 2. pairwise contacts, [`SOLVER_ITERATIONS`] passes
//! 3. cosmetic rotation

use tracing::trace;

use crate::collision::{
    constrain_to_walls, detect_floor_contact, resolve_floor_contact, solve_ball_contacts,
};
use crate::constants::SOLVER_ITERATIONS;
use crate::integrator::{advance_rotation, integrate_balls};
use crate::params::SimParams;
use crate::types::Ball;

/// What happened during one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub floor_contacts: usize,
    pub wall_hits: usize,
    /// Ball-ball contacts resolved, summed over all solver passes.
    pub ball_contacts: usize,
}

pub struct PhysicsStepper;

impl PhysicsStepper {
    /// Step `balls` by one frame. Does nothing while `params.active` is false.
    pub fn step(balls: &mut [Ball], delta: f32, params: &SimParams) -> StepReport {
        if !params.active {
            return StepReport::default();
        }
        let frames = params.time_mode.frame_factor(delta);

        let mut report = StepReport::default();
        integrate_balls(balls, params.gravity, frames);
        for ball in balls.iter_mut() {
            if detect_floor_contact(ball, params.arena.floor_y).is_some() {
                resolve_floor_contact(ball, params.arena.floor_y, params.bounciness, params.friction);
                report.floor_contacts += 1;
            }
            report.wall_hits += constrain_to_walls(ball, &params.arena);
        }

        report.ball_contacts = solve_ball_contacts(balls, SOLVER_ITERATIONS);
        advance_rotation(balls, frames);

        trace!(
            balls = balls.len(),
            floor = report.floor_contacts,
            walls = report.wall_hits,
            contacts = report.ball_contacts,
            "step"
        );
        report
    }
}
