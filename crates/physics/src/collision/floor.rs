//! Ball-floor contact

use crate::constants::{FLOOR_FRICTION_SCALE, REST_VELOCITY_THRESHOLD};
use crate::types::Ball;

/// Penetration depth into the floor, if the ball is below its resting height.
#[must_use]
pub fn detect_floor_contact(ball: &Ball, floor_y: f32) -> Option<f32> {
    let rest_y = floor_y + ball.radius;
    if ball.pos.y < rest_y {
        Some(rest_y - ball.pos.y)
    } else {
        None
    }
}

/// Put the ball back on the floor, bounce it and bleed off horizontal speed.
pub fn resolve_floor_contact(ball: &mut Ball, floor_y: f32, bounciness: f32, friction: f32) {
    ball.pos.y = floor_y + ball.radius;
    ball.vel.y *= -bounciness;

    let keep = 1.0 - friction * FLOOR_FRICTION_SCALE;
    ball.vel.x *= keep;
    ball.vel.z *= keep;

    // Stops micro-bounces that would otherwise jitter forever.
    if ball.vel.y.abs() < REST_VELOCITY_THRESHOLD {
        ball.vel.y = 0.0;
    }
}
