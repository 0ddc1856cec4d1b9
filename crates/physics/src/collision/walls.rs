//! Side walls on the X and Z axes

use crate::params::Arena;
use crate::types::Ball;

/// Clamp the ball into the arena, reflecting the clamped velocity component.
/// Returns how many walls were hit.
pub fn constrain_to_walls(ball: &mut Ball, arena: &Arena) -> usize {
    let hit_x = clamp_axis(&mut ball.pos.x, &mut ball.vel.x, arena.half_x, arena.wall_restitution);
    let hit_z = clamp_axis(&mut ball.pos.z, &mut ball.vel.z, arena.half_z, arena.wall_restitution);
    usize::from(hit_x) + usize::from(hit_z)
}

fn clamp_axis(pos: &mut f32, vel: &mut f32, half: f32, restitution: f32) -> bool {
    let limit = if *pos < -half {
        -half
    } else if *pos > half {
        half
    } else {
        return false;
    };
    *pos = limit;
    *vel *= -restitution;
    true
}
