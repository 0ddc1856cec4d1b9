//! Ball-ball contact detection and response

use super::Contact;
use crate::constants::{CONTACT_EPSILON_SQUARED, CONTACT_VELOCITY_DAMPING};
use crate::types::Ball;

/// Detect interpenetration between two balls.
///
/// Pairs whose centres (nearly) coincide are skipped: there is no usable
/// normal and dividing by the distance would produce NaN.
#[must_use]
pub fn detect_ball_contact(ball_a: &Ball, ball_b: &Ball) -> Option<Contact> {
    let delta = ball_b.pos - ball_a.pos;
    let distance_squared = delta.length_squared();
    let min_distance = ball_a.radius + ball_b.radius;

    if distance_squared < min_distance * min_distance && distance_squared > CONTACT_EPSILON_SQUARED {
        let distance = distance_squared.sqrt();
        Some(Contact {
            normal: delta / distance,
            depth: min_distance - distance,
        })
    } else {
        None
    }
}

/// Push two touching balls apart and blend their velocities.
///
/// Separation is mass weighted so the heavier ball moves less: `a` moves by
/// `depth * m_b / (m_a + m_b)` against the normal, `b` by
/// `depth * m_a / (m_a + m_b)` along it.
///
/// Both balls then take the mass-weighted mean of their velocities, damped.
/// This is not momentum conserving; it keeps large piles quiet.
pub fn resolve_ball_contact(ball_a: &mut Ball, ball_b: &mut Ball, contact: &Contact) {
    let total_mass = ball_a.mass + ball_b.mass;
    let ratio_a = ball_a.mass / total_mass;
    let ratio_b = ball_b.mass / total_mass;

    let correction = contact.normal * contact.depth;
    ball_a.pos -= correction * ratio_b;
    ball_b.pos += correction * ratio_a;

    let blended = (ball_a.vel * ratio_a + ball_b.vel * ratio_b) * CONTACT_VELOCITY_DAMPING;
    ball_a.vel = blended;
    ball_b.vel = blended;
}
