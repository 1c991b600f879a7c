//! Machine motion state tracked while a program is generated.
//!
//! Only the move emitter in [`crate::code_builder`] changes the state.

use foamcut_core::{coordinate_equals, CoordinateMode, MachineConfig, Point};

/// Where the tool is believed to be and how coordinates are interpreted.
///
/// X and Y are logical drawing coordinates; Z is the absolute machine
/// height. Depth predicates compare against the config with
/// [`coordinate_equals`].
#[derive(Debug, Clone)]
pub struct MachineState {
    cutting_depth: f64,
    scoring_depth: f64,
    x: f64,
    y: f64,
    z: f64,
    mode: CoordinateMode,
}

impl MachineState {
    /// Create a state at the origin in absolute mode
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            cutting_depth: config.cutting_depth,
            scoring_depth: config.scoring_depth,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            mode: CoordinateMode::Absolute,
        }
    }

    /// Current X
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current Y
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current Z
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Current coordinate mode
    pub fn mode(&self) -> CoordinateMode {
        self.mode
    }

    /// Current X/Y as a (rounded) point
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether Z is at the cutting depth
    pub fn cutting(&self) -> bool {
        coordinate_equals(self.z, self.cutting_depth)
    }

    /// Whether Z is at the scoring depth
    pub fn scoring(&self) -> bool {
        coordinate_equals(self.z, self.scoring_depth)
    }

    /// Whether Z is at either working depth
    pub fn cutting_or_scoring(&self) -> bool {
        self.cutting() || self.scoring()
    }

    /// Whether X/Y match within tolerance
    pub fn at_xy(&self, x: f64, y: f64) -> bool {
        coordinate_equals(self.x, x) && coordinate_equals(self.y, y)
    }

    /// Whether all three axes match within tolerance
    pub fn at(&self, x: f64, y: f64, z: f64) -> bool {
        self.at_xy(x, y) && coordinate_equals(self.z, z)
    }

    /// Record a new position
    pub(crate) fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Record a new coordinate mode
    pub(crate) fn set_mode(&mut self, mode: CoordinateMode) {
        self.mode = mode;
    }
}
