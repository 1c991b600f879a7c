//! Error handling for foamcut
//!
//! Provides error types for every layer of program generation:
//! - Path errors (path invariant violations)
//! - Motion errors (requests the motion model cannot express)
//! - Config errors (machine configuration validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path error type
///
/// A path with no points breaks the construction invariant. These errors
/// signal a programming mistake, not bad user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The path has no points
    #[error("This path has no points")]
    Empty,
}

/// Motion error type
///
/// Raised by the move emitter when asked for a move it cannot emit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A Z move was combined with an X/Y move
    #[error(
        "Cannot combine X-Y and Z moves in a single command: [{:.3},{:.3},{:.3}] -> [{:.3},{:.3},{:.3}]",
        from.0, from.1, from.2, to.0, to.1, to.2
    )]
    InvalidCombinedMove {
        /// The machine position when the move was requested.
        from: (f64, f64, f64),
        /// The requested target position.
        to: (f64, f64, f64),
    },
}

/// Machine configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Travel depth does not clear a working depth
    #[error("Travel depth {travel_depth} must be above the {role} depth {depth}")]
    TravelDepthTooLow {
        /// The configured travel depth.
        travel_depth: f64,
        /// The working role whose depth is not cleared.
        role: String,
        /// The working depth.
        depth: f64,
    },

    /// A feed rate is not a positive whole number
    #[error("Feed rate '{name}' must be a positive whole number, got {value}")]
    InvalidFeedRate {
        /// The feed rate name.
        name: String,
        /// The configured value.
        value: f64,
    },

    /// A depth is not finite
    #[error("Depth '{name}' must be finite, got {value}")]
    InvalidDepth {
        /// The depth name.
        name: String,
        /// The configured value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_move_display() {
        let err = MotionError::InvalidCombinedMove {
            from: (0.0, 0.0, 20.0),
            to: (1.0, 0.0, 0.0),
        };
        assert_eq!(
            err.to_string(),
            "Cannot combine X-Y and Z moves in a single command: [0.000,0.000,20.000] -> [1.000,0.000,0.000]"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::TravelDepthTooLow {
            travel_depth: 2.0,
            role: "scoring".to_string(),
            depth: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "Travel depth 2 must be above the scoring depth 5"
        );
    }
}
