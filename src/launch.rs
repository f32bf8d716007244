//! Launch state shared by the path integrator and the marker sampler.
//!
//! Both consumers must agree exactly on the initial velocity components and
//! the wind term, so they are derived once per recomputation from a single
//! `(AimVector, PhysicsParams)` snapshot and passed around by value.

use crate::aim_vector::AimVector;
use crate::constants::MAX_POWER;
use crate::params::PhysicsParams;
use nalgebra::Point2;

/// Initial conditions of one simulated flight
#[derive(Debug, Clone, Copy)]
pub struct LaunchState {
    /// Launch point in screen coordinates
    pub origin: Point2<f64>,
    /// Initial horizontal velocity (math space)
    pub v0x: f64,
    /// Initial vertical velocity (math space, positive up)
    pub v0y: f64,
    /// Signed constant horizontal acceleration from wind
    pub wind_accel: f64,
    /// Constant downward gravitational acceleration
    pub gravity: f64,
}

impl LaunchState {
    /// Derive initial conditions from a resolved aim and a parameter snapshot
    pub fn new(origin: Point2<f64>, vector: AimVector, params: &PhysicsParams) -> Self {
        let v0 = params.max_velocity * vector.power / MAX_POWER;
        Self {
            origin,
            v0x: v0 * vector.angle.cos(),
            v0y: v0 * vector.angle.sin(),
            wind_accel: params.wind_accel(),
            gravity: params.gravity,
        }
    }

    /// Closed-form position at elapsed time `t`, in screen coordinates.
    ///
    /// The vertical displacement is computed in math space (up positive) and
    /// subtracted from the origin's screen y.
    pub fn position_at(&self, t: f64) -> Point2<f64> {
        let x = self.origin.x + self.v0x * t + 0.5 * self.wind_accel * t * t;
        let rise = self.v0y * t - 0.5 * self.gravity * t * t;
        Point2::new(x, self.origin.y - rise)
    }

    /// Instantaneous vertical velocity at `t` (math space, positive up)
    pub fn vertical_velocity_at(&self, t: f64) -> f64 {
        self.v0y - self.gravity * t
    }

    /// True once the flight is past apex and below the canvas floor at `t`
    pub fn descending_below_floor(&self, t: f64, screen_y: f64, canvas_height: f64) -> bool {
        self.vertical_velocity_at(t) < 0.0 && screen_y > canvas_height
    }
}
