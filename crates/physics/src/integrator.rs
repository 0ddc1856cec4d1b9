//! # Ball Integration
//!
//! Semi-implicit Euler: gravity changes the velocity first, then the
//! post-gravity velocity moves the ball.

use crate::constants::GRAVITY_SCALE;
use crate::types::Ball;

/// Apply gravity and advance positions by `frames` reference frames.
pub fn integrate_balls(balls: &mut [Ball], gravity: f32, frames: f32) {
    let dv = gravity * GRAVITY_SCALE * frames;
    for ball in balls.iter_mut() {
        ball.vel.y -= dv;
        ball.pos += ball.vel * frames;
    }
}

/// Advance the cosmetic rotation. Physics never reads it back.
pub fn advance_rotation(balls: &mut [Ball], frames: f32) {
    for ball in balls.iter_mut() {
        ball.rotation += ball.spin * frames;
    }
}
