//! Physics configuration supplied by the UI layer.
//!
//! The engine treats a `PhysicsParams` as an immutable snapshot: the caller
//! replaces the whole value on any control change, and a recomputation only
//! ever reads one snapshot. Validation happens at the replacement boundary so
//! the numeric core can assume well-formed inputs.

use crate::constants::WIND_MAGNITUDE_LIMIT;
use std::error::Error;
use std::fmt;

/// Error type for parameter validation
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A configuration field is outside its valid range
    InvalidParameter { field: &'static str, value: f64 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamError::InvalidParameter { field, value } => {
                write!(f, "invalid parameter {field}: {value}")
            }
        }
    }
}

impl Error for ParamError {}

/// Physics configuration snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    /// Downward gravitational acceleration (canvas units / s²)
    pub gravity: f64,
    /// Launch speed at 100% power (canvas units / s)
    pub max_velocity: f64,
    /// Drag distance mapping to 100% power (canvas units)
    pub max_radius: f64,
    /// Signed wind control value; negative blows leftward
    pub wind_direction_magnitude: i32,
    /// Horizontal acceleration per unit of wind magnitude (canvas units / s²)
    pub wind_acceleration: f64,
    /// Simulated seconds represented by one displayed tick
    pub ticks_per_second: f64,
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        // Mirrors the aimer tool's control defaults at its 1920x1440 preset
        Self {
            gravity: 9.8,
            max_velocity: 100.0,
            max_radius: 100.0,
            wind_direction_magnitude: 0,
            wind_acceleration: 0.0,
            ticks_per_second: 1.0,
            canvas_width: 1920.0,
            canvas_height: 1440.0,
        }
    }
}

impl PhysicsParams {
    /// Check every field against its valid range.
    ///
    /// The comparisons are written so that NaN fails them as well.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.gravity > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "gravity",
                value: self.gravity,
            });
        }
        if !(self.max_velocity > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "max_velocity",
                value: self.max_velocity,
            });
        }
        if !(self.max_radius > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "max_radius",
                value: self.max_radius,
            });
        }
        if self.wind_direction_magnitude.abs() > WIND_MAGNITUDE_LIMIT {
            return Err(ParamError::InvalidParameter {
                field: "wind_direction_magnitude",
                value: self.wind_direction_magnitude as f64,
            });
        }
        if !(self.wind_acceleration >= 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "wind_acceleration",
                value: self.wind_acceleration,
            });
        }
        if !(self.ticks_per_second > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "ticks_per_second",
                value: self.ticks_per_second,
            });
        }
        if !(self.canvas_width > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "canvas_width",
                value: self.canvas_width,
            });
        }
        if !(self.canvas_height > 0.0) {
            return Err(ParamError::InvalidParameter {
                field: "canvas_height",
                value: self.canvas_height,
            });
        }
        Ok(())
    }

    /// Signed horizontal wind acceleration applied throughout a flight
    pub fn wind_accel(&self) -> f64 {
        self.wind_direction_magnitude as f64 * self.wind_acceleration
    }
}

/// Parse a `WIDTHxHEIGHT` resolution preset such as `1920x1440`
pub fn parse_resolution(preset: &str) -> Result<(f64, f64), ParamError> {
    let invalid = || ParamError::InvalidParameter {
        field: "resolution",
        value: f64::NAN,
    };

    let (w, h) = preset.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f64 = w.trim().parse().map_err(|_| invalid())?;
    let height: f64 = h.trim().parse().map_err(|_| invalid())?;

    if !(width > 0.0) || !(height > 0.0) {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(PhysicsParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_gravity() {
        let params = PhysicsParams {
            gravity: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::InvalidParameter {
                field: "gravity",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_rejects_nan_fields() {
        let params = PhysicsParams {
            max_velocity: f64::NAN,
            ..Default::default()
        };
        match params.validate() {
            Err(ParamError::InvalidParameter { field, .. }) => {
                assert_eq!(field, "max_velocity");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_wind_magnitude() {
        let params = PhysicsParams {
            wind_direction_magnitude: 11,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = PhysicsParams {
            wind_direction_magnitude: -10,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_wind_acceleration() {
        let params = PhysicsParams {
            wind_acceleration: -0.5,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_wind_accel_sign_encodes_direction() {
        let mut params = PhysicsParams {
            wind_direction_magnitude: -3,
            wind_acceleration: 2.0,
            ..Default::default()
        };
        assert_eq!(params.wind_accel(), -6.0);

        params.wind_direction_magnitude = 3;
        assert_eq!(params.wind_accel(), 6.0);

        params.wind_direction_magnitude = 0;
        assert_eq!(params.wind_accel(), 0.0);
    }

    #[test]
    fn test_parse_resolution_presets() {
        assert_eq!(parse_resolution("1920x1440").unwrap(), (1920.0, 1440.0));
        assert_eq!(parse_resolution("1280x720").unwrap(), (1280.0, 720.0));
        assert!(parse_resolution("800").is_err());
        assert!(parse_resolution("0x600").is_err());
        assert!(parse_resolution("axb").is_err());
    }
}
