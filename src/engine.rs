//! Engine facade driven by the UI layer.
//!
//! The UI feeds pointer events and parameter changes in; the engine keeps
//! the session state, recomputes the helper geometry synchronously on every
//! change, and hands the result back through pull-based accessors. Single
//! threaded by construction: every operation runs to completion before
//! control returns.

use crate::aim_vector::{resolve_aim_vector, AimVector};
use crate::integrator::integrate_path;
use crate::launch::LaunchState;
use crate::markers::sample_markers;
use crate::params::{ParamError, PhysicsParams};
use crate::session::{AimPhase, AimSession};
use nalgebra::Point2;

/// One recomputed flight visualization.
///
/// Rebuilt wholesale on every dependency change; the renderer treats it as
/// read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// Time-ordered flight path polyline (screen space)
    pub path: Vec<Point2<f64>>,
    /// Elapsed-time marker positions, at most one per tick label
    pub markers: Vec<Point2<f64>>,
}

impl Trajectory {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.markers.is_empty()
    }
}

/// Trajectory computation engine owning the aim session
#[derive(Debug, Clone)]
pub struct AimEngine {
    params: PhysicsParams,
    session: AimSession,
    trajectory: Trajectory,
}

impl AimEngine {
    /// Create an engine with a validated parameter snapshot
    pub fn new(params: PhysicsParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self {
            params,
            session: AimSession::new(),
            trajectory: Trajectory::default(),
        })
    }

    /// Engine with the aimer tool's default controls
    pub fn with_defaults() -> Self {
        Self {
            params: PhysicsParams::default(),
            session: AimSession::new(),
            trajectory: Trajectory::default(),
        }
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn phase(&self) -> AimPhase {
        self.session.phase()
    }

    pub fn session(&self) -> &AimSession {
        &self.session
    }

    /// Set the launch origin, clearing any prior gesture and trajectory
    pub fn set_origin(&mut self, p: Point2<f64>) {
        self.session.set_origin(p);
        self.recompute();
    }

    /// Start a drag gesture; ignored while no origin is set
    pub fn begin_aim(&mut self, p: Point2<f64>) {
        self.session.begin_aim(p);
        self.recompute();
    }

    /// Move the active drag; ignored outside a drag
    pub fn update_aim(&mut self, p: Point2<f64>) {
        self.session.update_aim(p);
        self.recompute();
    }

    /// Release the drag, freezing the vector resolved at release time
    pub fn end_aim(&mut self) {
        let frozen = self.live_vector();
        self.session.end_aim(frozen);
        self.recompute();
    }

    /// Replace the physics configuration wholesale.
    ///
    /// An invalid snapshot is rejected and the previous configuration stays
    /// in effect.
    pub fn set_params(&mut self, params: PhysicsParams) -> Result<(), ParamError> {
        params.validate()?;
        self.params = params;
        self.recompute();
        Ok(())
    }

    /// The vector the helper geometry is currently based on: live-resolved
    /// while dragging, otherwise the one frozen at the last release
    pub fn current_vector(&self) -> Option<AimVector> {
        self.live_vector().or_else(|| self.session.last_vector())
    }

    /// The latest recomputed trajectory; empty while no vector is available
    pub fn current_trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    fn live_vector(&self) -> Option<AimVector> {
        match (self.session.origin(), self.session.pointer()) {
            (Some(origin), Some(pointer)) => {
                Some(resolve_aim_vector(origin, pointer, self.params.max_radius))
            }
            _ => None,
        }
    }

    fn recompute(&mut self) {
        self.trajectory = match (self.session.origin(), self.current_vector()) {
            (Some(origin), Some(vector)) => {
                let launch = LaunchState::new(origin, vector, &self.params);
                Trajectory {
                    path: integrate_path(&launch, &self.params),
                    markers: sample_markers(&launch, &self.params),
                }
            }
            _ => Trajectory::default(),
        };
    }
}

impl Default for AimEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Compute a one-shot trajectory outside of a session.
///
/// Convenience for callers (such as the CLI) that have an origin and a
/// resolved vector in hand and do not need gesture tracking.
pub fn compute_trajectory(
    origin: Point2<f64>,
    vector: AimVector,
    params: &PhysicsParams,
) -> Result<Trajectory, ParamError> {
    params.validate()?;
    let launch = LaunchState::new(origin, vector, params);
    Ok(Trajectory {
        path: integrate_path(&launch, params),
        markers: sample_markers(&launch, params),
    })
}
