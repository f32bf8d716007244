use aimer_engine::{resolve_aim_vector, AimEngine, AimPhase, PhysicsParams};
use nalgebra::Point2;

fn params_800x600() -> PhysicsParams {
    PhysicsParams {
        gravity: 10.0,
        max_velocity: 100.0,
        max_radius: 100.0,
        wind_direction_magnitude: 0,
        wind_acceleration: 0.0,
        ticks_per_second: 1.0,
        canvas_width: 800.0,
        canvas_height: 600.0,
    }
}

fn engine() -> AimEngine {
    AimEngine::new(params_800x600()).unwrap()
}

#[test]
fn test_zero_distance_drag_resolves_quietly() {
    let p = Point2::new(300.0, 200.0);
    let v = resolve_aim_vector(p, p, 100.0);
    assert_eq!(v.angle, 0.0);
    assert_eq!(v.power, 0.0);

    let v = resolve_aim_vector(p, p, 0.0);
    assert_eq!(v.power, 100.0);
}

#[test]
fn test_power_stays_within_bounds_for_any_drag() {
    let origin = Point2::new(0.0, 0.0);
    for &(x, y) in &[
        (0.0, 0.0),
        (1.0, 1.0),
        (99.0, 0.0),
        (100.0, 0.0),
        (10_000.0, -10_000.0),
        (-5_000.0, 3.0),
    ] {
        let v = resolve_aim_vector(origin, Point2::new(x, y), 100.0);
        assert!(
            (0.0..=100.0).contains(&v.power),
            "power {} out of range for drag ({x},{y})",
            v.power
        );
    }
}

#[test]
fn test_current_trajectory_is_idempotent() {
    let mut engine = engine();
    engine.set_origin(Point2::new(100.0, 100.0));
    engine.begin_aim(Point2::new(180.0, 60.0));

    let first = engine.current_trajectory().clone();
    let second = engine.current_trajectory().clone();
    assert_eq!(first, second);
}

#[test]
fn test_boundary_scenario_horizontal_full_power() {
    // origin (100,100), pointer (200,100), radius 100 -> angle 0, power 100
    let mut engine = engine();
    engine.set_origin(Point2::new(100.0, 100.0));
    engine.begin_aim(Point2::new(200.0, 100.0));

    let vector = engine.current_vector().unwrap();
    assert_eq!(vector.angle, 0.0);
    assert_eq!(vector.power, 100.0);

    let trajectory = engine.current_trajectory();
    assert_eq!(trajectory.path[0], Point2::new(100.0, 100.0));

    // Rightward motion with increasing downward curvature
    let mut prev_dy = 0.0;
    for pair in trajectory.path.windows(2) {
        assert!(pair[1].x > pair[0].x);
        let dy = pair[1].y - pair[0].y;
        assert!(dy >= prev_dy - 1e-9);
        prev_dy = dy;
    }

    // Terminates at the canvas edge, never past it
    for p in &trajectory.path {
        assert!(p.x <= 800.0);
        assert!(p.y <= 600.0);
    }
}

#[test]
fn test_marker_descent_is_monotonic_without_horizontal_motion() {
    // Straight-down drag: no wind, no horizontal velocity
    let mut engine = engine();
    engine.set_origin(Point2::new(400.0, 50.0));
    engine.begin_aim(Point2::new(400.0, 120.0));

    let markers = &engine.current_trajectory().markers;
    assert!(!markers.is_empty());
    for pair in markers.windows(2) {
        assert!(pair[1].y >= pair[0].y);
    }
}

#[test]
fn test_release_freezes_the_last_vector() {
    let mut engine = engine();
    engine.set_origin(Point2::new(100.0, 100.0));
    engine.begin_aim(Point2::new(120.0, 90.0));
    engine.update_aim(Point2::new(160.0, 40.0));
    engine.end_aim();

    let expected = resolve_aim_vector(
        Point2::new(100.0, 100.0),
        Point2::new(160.0, 40.0),
        100.0,
    );
    assert_eq!(engine.current_vector(), Some(expected));
    assert_eq!(engine.phase(), AimPhase::Armed);

    // Ghost pointer-move events after release do not disturb it
    engine.update_aim(Point2::new(500.0, 500.0));
    assert_eq!(engine.current_vector(), Some(expected));
}

#[test]
fn test_rearm_clears_everything() {
    let mut engine = engine();
    engine.set_origin(Point2::new(100.0, 100.0));
    engine.begin_aim(Point2::new(200.0, 100.0));
    engine.end_aim();
    assert!(engine.current_vector().is_some());
    assert!(!engine.current_trajectory().is_empty());

    engine.set_origin(Point2::new(300.0, 300.0));
    assert_eq!(engine.phase(), AimPhase::Armed);
    assert!(engine.current_vector().is_none());
    assert!(engine.current_trajectory().is_empty());
}

#[test]
fn test_wind_pushes_the_frozen_trajectory_sideways() {
    let mut engine = engine();
    engine.set_origin(Point2::new(400.0, 100.0));
    engine.begin_aim(Point2::new(400.0, 30.0));
    engine.end_aim();

    let still = engine.current_trajectory().clone();

    let mut windy = params_800x600();
    windy.wind_direction_magnitude = 5;
    windy.wind_acceleration = 2.0;
    engine.set_params(windy).unwrap();

    let blown = engine.current_trajectory();
    assert_ne!(&still, blown);
    // Rightward wind: every later point sits right of the calm one
    for (calm, pushed) in still.path.iter().zip(&blown.path).skip(1) {
        assert!(pushed.x > calm.x);
    }
}
