//! Fixed-step flight path integration.
//!
//! The path is sampled at `TIME_STEP_S` intervals from launch until it
//! leaves the canvas. Points are evaluated from the closed-form kinematics
//! in [`LaunchState`], so the drawn path and the time markers cannot drift
//! apart numerically.

use crate::constants::{MAX_INTEGRATION_STEPS, TIME_STEP_S};
use crate::launch::LaunchState;
use crate::params::PhysicsParams;
use nalgebra::Point2;

/// Integrate the flight path from launch to termination.
///
/// Termination is exclusive: the first point that is horizontally outside
/// the canvas, or past apex and below the canvas floor, is dropped and the
/// loop stops. Ascending flight may leave the top of the canvas without
/// terminating; only a downward crossing of the floor ends it. The step
/// ceiling bounds configurations that never meet either condition.
pub fn integrate_path(launch: &LaunchState, params: &PhysicsParams) -> Vec<Point2<f64>> {
    let mut path = Vec::new();

    for step in 0..MAX_INTEGRATION_STEPS {
        let t = step as f64 * TIME_STEP_S;
        let point = launch.position_at(t);

        if point.x < 0.0 || point.x > params.canvas_width {
            break;
        }
        if launch.descending_below_floor(t, point.y, params.canvas_height) {
            break;
        }

        path.push(point);
    }

    path
}
