use physics::constants::FLOOR_Y;
use physics::{Ball, PhysicsStepper, SimParams, Vec3};

fn bouncy(gravity: f32) -> SimParams {
    SimParams {
        active: true,
        gravity,
        bounciness: 0.5,
        friction: 0.5,
        ..SimParams::default()
    }
}

#[test]
fn ball_never_rests_below_the_floor() {
    let mut balls = vec![Ball::new(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO, 1.0, 1.0, 1.0)];
    PhysicsStepper::step(&mut balls, 1.0 / 60.0, &bouncy(1.0));
    assert_eq!(balls[0].pos.y, FLOOR_Y + 1.0);
}

#[test]
fn bounce_peaks_decrease_and_vertical_speed_snaps_to_zero() {
    let radius = 1.0;
    let rest_y = FLOOR_Y + radius;
    let params = bouncy(0.5);
    let mut balls = vec![Ball::new(Vec3::new(0.0, 20.0, 0.0), Vec3::ZERO, radius, 1.0, 1.0)];

    let mut peaks = Vec::new();
    let mut current_peak = f32::MIN;
    for _ in 0..400 {
        PhysicsStepper::step(&mut balls, 1.0 / 60.0, &params);
        let ball = balls[0];
        current_peak = current_peak.max(ball.pos.y);

        if ball.pos.y == rest_y {
            if ball.vel.y.abs() < 0.05 {
                assert_eq!(ball.vel.y, 0.0, "slow floor bounce must snap to exactly zero");
            }
            if current_peak > rest_y {
                peaks.push(current_peak);
            }
            current_peak = f32::MIN;
        }
    }

    assert!(peaks.len() >= 3, "expected several bounces, got {peaks:?}");
    for pair in peaks.windows(2) {
        assert!(pair[1] < pair[0], "bounce peaks must strictly decrease: {peaks:?}");
    }
    assert_eq!(balls[0].vel.y, 0.0);
    assert_eq!(balls[0].pos.y, rest_y);
}

#[test]
fn resting_ball_sits_exactly_on_the_floor() {
    let params = bouncy(0.5);
    let mut balls = vec![Ball::new(Vec3::new(2.0, FLOOR_Y + 1.1, -1.0), Vec3::ZERO, 1.0, 1.1, 1.0)];
    for _ in 0..200 {
        PhysicsStepper::step(&mut balls, 1.0 / 60.0, &params);
        if balls[0].vel.y == 0.0 {
            assert_eq!(balls[0].pos.y, FLOOR_Y + balls[0].radius);
        }
    }
    assert_eq!(balls[0].vel, Vec3::ZERO);
    assert_eq!(balls[0].pos.y, FLOOR_Y + balls[0].radius);
}

#[test]
fn friction_slows_sliding_balls() {
    let mut grippy = vec![Ball::new(Vec3::new(0.0, FLOOR_Y + 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1.0, 1.0, 1.0)];
    let mut slick = grippy.clone();
    let grip = SimParams { friction: 1.0, ..bouncy(0.5) };
    let ice = SimParams { friction: 0.0, ..bouncy(0.5) };
    for _ in 0..20 {
        PhysicsStepper::step(&mut grippy, 1.0 / 60.0, &grip);
        PhysicsStepper::step(&mut slick, 1.0 / 60.0, &ice);
    }
    assert!((slick[0].vel.x - 1.0).abs() < 1e-6, "frictionless floor keeps speed");
    assert!((grippy[0].vel.x - 0.9_f32.powi(20)).abs() < 1e-4);
}
