//! # Collision Detection and Response
//!
//! Floor and wall constraints act on one ball at a time. Ball-ball contacts
//! are resolved by an iterative pairwise solver: every unordered pair is
//! visited in index order and corrected in place, so later pairs in the same
//! pass already see the corrections of earlier ones. That ordering is part of
//! how the pile settles and must not be turned into a simultaneous update.
//!
//! Penetration is bounded rather than eliminated: see [`SOLVER_ITERATIONS`]
//! for the overlap a landing stack can show.
//!
//! [`SOLVER_ITERATIONS`]: crate::constants::SOLVER_ITERATIONS
//!
//! There is no broad phase. The solver is O(n²) per pass, which is fine for
//! tens of balls.

mod floor;
mod sphere_sphere;
mod walls;

pub use floor::*;
pub use sphere_sphere::*;
pub use walls::*;

use crate::types::{Ball, Vec3};

/// Ball-ball contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from ball A to ball B.
    pub normal: Vec3,
    /// How far the balls overlap along the normal.
    pub depth: f32,
}

/// Run `iterations` passes over every ball pair. Returns the number of
/// contacts resolved across all passes.
pub fn solve_ball_contacts(balls: &mut [Ball], iterations: usize) -> usize {
    let count = balls.len();
    if count < 2 {
        return 0;
    }

    let mut resolved = 0;
    for _ in 0..iterations {
        for i in 0..count {
            for j in (i + 1)..count {
                let (before, after) = balls.split_at_mut(j);
                let (ball_a, ball_b) = (&mut before[i], &mut after[0]);
                if let Some(contact) = detect_ball_contact(ball_a, ball_b) {
                    resolve_ball_contact(ball_a, ball_b, &contact);
                    resolved += 1;
                }
            }
        }
    }
    resolved
}
