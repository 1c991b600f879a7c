//! Coordinate interpretation modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate interpretation for positioning commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Targets are absolute machine coordinates (G90)
    #[default]
    Absolute,
    /// Targets are displacements from the current position (G91)
    Relative,
}

impl fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display_and_default() {
        assert_eq!(CoordinateMode::default(), CoordinateMode::Absolute);
        assert_eq!(CoordinateMode::Relative.to_string(), "relative");
    }
}
