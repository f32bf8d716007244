//! Aim vector resolution from a drag gesture.
//!
//! Screen coordinates put the origin at the top-left with y growing downward;
//! the resolver flips the vertical delta so the returned angle follows the
//! math convention (0 points right, positive turns counter-clockwise on
//! screen).

use crate::constants::MAX_POWER;
use nalgebra::Point2;

/// Resolved aim: launch angle and normalized power
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimVector {
    /// Launch angle in radians, range (-π, π]
    pub angle: f64,
    /// Normalized draw distance in [0, 100]
    pub power: f64,
}

/// Resolve angle and power from the origin and the current pointer position.
///
/// Power maps the drag distance linearly onto `[0, 100]` against
/// `max_radius`, saturating at 100. A non-positive `max_radius` falls back to
/// full power regardless of drag distance. Zero drag distance resolves to
/// angle 0 rather than feeding `atan2` an undefined direction.
pub fn resolve_aim_vector(origin: Point2<f64>, pointer: Point2<f64>, max_radius: f64) -> AimVector {
    let dx = pointer.x - origin.x;
    let dy = pointer.y - origin.y;

    let distance = (dx * dx + dy * dy).sqrt();
    let power = if max_radius <= 0.0 {
        MAX_POWER
    } else {
        (distance / max_radius * MAX_POWER).min(MAX_POWER)
    };

    // Flipped vertical delta converts the screen-space direction to
    // math-space. Computed as a subtraction rather than -dy so a level drag
    // carries positive zero into atan2 and a leftward aim resolves to +pi,
    // keeping the angle in (-pi, pi].
    let angle = if distance == 0.0 {
        0.0
    } else {
        (origin.y - pointer.y).atan2(dx)
    };

    AimVector { angle, power }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_horizontal_drag_at_radius_is_full_power() {
        let v = resolve_aim_vector(
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 100.0),
            100.0,
        );
        assert_eq!(v.angle, 0.0);
        assert_eq!(v.power, 100.0);
    }

    #[test]
    fn test_power_saturates_beyond_radius() {
        let v = resolve_aim_vector(Point2::new(0.0, 0.0), Point2::new(500.0, 0.0), 100.0);
        assert_eq!(v.power, 100.0);
    }

    #[test]
    fn test_power_scales_linearly_inside_radius() {
        let v = resolve_aim_vector(Point2::new(0.0, 0.0), Point2::new(30.0, 40.0), 100.0);
        assert!((v.power - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_resolves_without_panic() {
        let p = Point2::new(42.0, 17.0);
        let v = resolve_aim_vector(p, p, 100.0);
        assert_eq!(v.angle, 0.0);
        assert_eq!(v.power, 0.0);
    }

    #[test]
    fn test_degenerate_radius_falls_back_to_full_power() {
        let p = Point2::new(10.0, 10.0);
        let v = resolve_aim_vector(p, p, 0.0);
        assert_eq!(v.power, 100.0);
        assert_eq!(v.angle, 0.0);
    }

    #[test]
    fn test_upward_drag_yields_positive_angle() {
        // Pointer above the origin on screen (smaller y) aims upward
        let v = resolve_aim_vector(Point2::new(0.0, 0.0), Point2::new(0.0, -50.0), 100.0);
        assert!((v.angle - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_downward_drag_yields_negative_angle() {
        let v = resolve_aim_vector(Point2::new(0.0, 0.0), Point2::new(0.0, 50.0), 100.0);
        assert!((v.angle + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_leftward_drag_yields_pi() {
        let v = resolve_aim_vector(Point2::new(0.0, 0.0), Point2::new(-50.0, 0.0), 100.0);
        assert!((v.angle - PI).abs() < 1e-12);
    }
}
