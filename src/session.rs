//! Aim gesture session state.
//!
//! The session remembers where the launch origin sits, whether a drag is in
//! progress, and the last vector resolved before the pointer was released.
//! Out-of-phase transitions are ignored rather than rejected: a stray
//! pointer-move arriving after release is a UI race, not a programmer error.

use crate::aim_vector::AimVector;
use nalgebra::Point2;

/// Gesture phase derived from the session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimPhase {
    /// No origin set
    Idle,
    /// Origin set, no drag in progress
    Armed,
    /// Origin set and pointer actively dragging
    Aiming,
}

/// Session state for one aiming gesture cycle.
///
/// Invariant: `pointer` is only ever set while `origin` is set.
#[derive(Debug, Clone, Default)]
pub struct AimSession {
    origin: Option<Point2<f64>>,
    pointer: Option<Point2<f64>>,
    last_vector: Option<AimVector>,
}

impl AimSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AimPhase {
        match (self.origin, self.pointer) {
            (None, _) => AimPhase::Idle,
            (Some(_), None) => AimPhase::Armed,
            (Some(_), Some(_)) => AimPhase::Aiming,
        }
    }

    pub fn origin(&self) -> Option<Point2<f64>> {
        self.origin
    }

    pub fn pointer(&self) -> Option<Point2<f64>> {
        self.pointer
    }

    pub fn last_vector(&self) -> Option<AimVector> {
        self.last_vector
    }

    /// Arm the session at a new launch origin, discarding any prior gesture
    pub fn set_origin(&mut self, p: Point2<f64>) {
        self.origin = Some(p);
        self.pointer = None;
        self.last_vector = None;
    }

    /// Start a drag. Ignored while no origin is set.
    pub fn begin_aim(&mut self, p: Point2<f64>) {
        if self.origin.is_some() {
            self.pointer = Some(p);
        }
    }

    /// Move the active drag. Ignored unless a drag is in progress.
    pub fn update_aim(&mut self, p: Point2<f64>) {
        if self.pointer.is_some() {
            self.pointer = Some(p);
        }
    }

    /// End the drag, freezing `frozen` as the vector to keep displaying.
    ///
    /// The caller resolves `frozen` from the final pointer position before
    /// invoking this. Ignored unless a drag is in progress.
    pub fn end_aim(&mut self, frozen: Option<AimVector>) {
        if self.pointer.is_some() {
            self.last_vector = frozen;
            self.pointer = None;
        }
    }
}
