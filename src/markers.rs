//! Elapsed-time markers along the flight path.
//!
//! Markers label where the projectile is after whole ticks of scaled time:
//! marker `i` sits at simulated time `i * ticks_per_second`. They are
//! evaluated from the same [`LaunchState`] closed form as the drawn path
//! rather than by re-walking the integrator.

use crate::constants::MAX_TIME_MARKERS;
use crate::launch::LaunchState;
use crate::params::PhysicsParams;
use nalgebra::Point2;

/// Sample up to [`MAX_TIME_MARKERS`] marker positions.
///
/// Sampling stops once a marker lands past apex and below the canvas floor;
/// unlike the path integrator, that out-of-bounds marker is kept as the last
/// entry so the final label still renders just off the visible flight.
/// Markers are not filtered against the horizontal bounds.
pub fn sample_markers(launch: &LaunchState, params: &PhysicsParams) -> Vec<Point2<f64>> {
    let mut markers = Vec::with_capacity(MAX_TIME_MARKERS);

    for i in 1..=MAX_TIME_MARKERS {
        let t = i as f64 * params.ticks_per_second;
        let point = launch.position_at(t);
        let done = launch.descending_below_floor(t, point.y, params.canvas_height);

        markers.push(point);
        if done {
            break;
        }
    }

    markers
}
