//! Error types for the CAM tools crate.
//!
//! Program generation aborts on the first error: a partially correct
//! cutting program is unsafe to run.

use foamcut_core::{ConfigError, MotionError, PathError};
use std::io;
use thiserror::Error;

/// Errors that can occur during program generation.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The emitter was asked for a move the motion model cannot express.
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// A path invariant was violated.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The machine configuration is invalid.
    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// I/O error while writing the program.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::from(PathError::Empty);
        assert_eq!(err.to_string(), "This path has no points");

        let err = CamToolError::from(ConfigError::InvalidFeedRate {
            name: "cutting".to_string(),
            value: 0.0,
        });
        assert_eq!(
            err.to_string(),
            "Invalid machine configuration: Feed rate 'cutting' must be a positive whole number, got 0"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: CamToolError = MotionError::InvalidCombinedMove {
            from: (0.0, 0.0, 20.0),
            to: (5.0, 0.0, 0.0),
        }
        .into();
        assert!(matches!(err, CamToolError::Motion(_)));

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: CamToolError = io_err.into();
        assert!(matches!(err, CamToolError::IoError(_)));
    }
}
