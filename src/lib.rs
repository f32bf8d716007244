//! # Aimer Engine
//!
//! Trajectory computation engine for an on-screen projectile aiming aid.
//!
//! Given a fixed launch origin, a pointer-dragged aim target, and a physics
//! configuration, the engine resolves an aim vector (angle and normalized
//! power), integrates the flight path under gravity and constant wind
//! acceleration into a bounded polyline, and samples elapsed-time markers
//! along the same motion model. Rendering, input handling, and window
//! management belong to the caller; this crate is the pure numeric core.

// Re-export the main types and functions
pub use aim_vector::{resolve_aim_vector, AimVector};
pub use engine::{compute_trajectory, AimEngine, Trajectory};
pub use launch::LaunchState;
pub use params::{parse_resolution, ParamError, PhysicsParams};
pub use session::{AimPhase, AimSession};

// Module declarations
pub mod aim_vector;
pub mod constants;
pub mod engine;
pub mod integrator;
pub mod launch;
pub mod markers;
pub mod params;
pub mod session;
