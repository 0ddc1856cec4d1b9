use physics::constants::FLOOR_Y;
use physics::{Ball, SimParams, Simulation, Vec3};

#[test]
fn dropped_balls_settle_into_a_resting_pile() {
    let params = SimParams {
        active: true,
        ball_count: 10,
        gravity: 0.5,
        bounciness: 0.5,
        friction: 0.5,
        ..SimParams::default()
    };

    for seed in [1_u64, 2, 3] {
        let mut sim = Simulation::with_seed(seed);
        for _ in 0..3000 {
            sim.step(1.0 / 60.0, &params);
        }

        let info = sim.debug_info();
        assert!(info.settled, "seed {seed}: still moving, max speed {}", info.max_speed);
        assert_eq!(info.frame, 3000);
        assert!(info.max_overlap < 0.05, "seed {seed}: overlap {}", info.max_overlap);

        for ball in sim.balls() {
            assert!(ball.pos.y - ball.radius >= FLOOR_Y - 1e-4, "ball sank through the floor");
            let height = ball.pos.y - (FLOOR_Y + ball.radius);
            if height.abs() < 1e-3 {
                assert!(height.abs() < 1e-4, "floor ball not at rest height: {height}");
            }
        }
    }
}

#[test]
fn rotation_keeps_turning_after_the_pile_settles() {
    let params = SimParams { active: true, ball_count: 3, gravity: 0.5, ..SimParams::default() };
    let mut sim = Simulation::with_seed(4);
    for _ in 0..2000 {
        sim.step(1.0 / 60.0, &params);
    }
    let before = sim.transforms();
    sim.step(1.0 / 60.0, &params);
    let after = sim.transforms();

    for (b, a) in before.iter().zip(&after) {
        let turned = a.rotation - b.rotation;
        assert!((turned - a.rotation_delta).length() < 1e-4);
    }
}

fn resting_ball_speeds(gravity: f32) -> Vec<(f32, bool)> {
    let params = SimParams { active: true, ball_count: 0, gravity, ..SimParams::default() };
    let mut sim = Simulation::with_seed(6);
    sim.sync(&params);
    let rest_y = FLOOR_Y + 1.0;
    sim.store_mut().push(Ball::new(Vec3::new(0.0, rest_y, 0.0), Vec3::ZERO, 1.0, 1.0, 1.0));

    (0..10)
        .map(|_| {
            sim.step(1.0 / 60.0, &params);
            let ball = sim.balls()[0];
            assert!((ball.pos.y - rest_y).abs() < 1e-5, "ball left the floor: y={}", ball.pos.y);
            (ball.speed(), sim.is_settled())
        })
        .collect()
}

#[test]
fn resting_ball_hops_at_default_gravity() {
    let frames = resting_ball_speeds(SimParams::default().gravity);

    // 0.15 of fall per frame bounces back at 0.075, above the snap threshold;
    // the frame after, the smaller bounce is snapped to zero.
    for pair in frames.windows(2) {
        assert!(!pair[0].1 || !pair[1].1, "settled on consecutive frames: {frames:?}");
    }
    let peak = frames.iter().map(|f| f.0).fold(0.0, f32::max);
    assert!((peak - 0.075).abs() < 1e-5, "peak speed {peak}");
}

#[test]
fn resting_ball_is_settled_at_half_gravity() {
    let frames = resting_ball_speeds(0.5);
    assert!(frames.iter().all(|&(speed, settled)| settled && speed == 0.0), "{frames:?}");
}
