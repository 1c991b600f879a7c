//! Machine configuration.

use crate::error::ConfigError;
use crate::path::{MachinePath, Role};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Feed rates (mm/min)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedRates {
    /// Rate for moves at travel depth
    pub travel: f64,
    /// Rate for moves at cutting or scoring depth
    pub cutting: f64,
    /// Rate for downward Z moves
    pub plunge: f64,
    /// Rate for upward Z moves
    pub retract: f64,
}

impl Default for FeedRates {
    fn default() -> Self {
        Self {
            travel: 6000.0,
            cutting: 900.0,
            plunge: 1500.0,
            retract: 1500.0,
        }
    }
}

/// Depths, feed rates and origin translation for one program.
///
/// Z values are absolute machine coordinates where smaller is deeper. The
/// default machine is homed so that Z=0 engages the needle fully through the
/// workpiece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Depth for cutting through the stock (mm)
    pub cutting_depth: f64,
    /// Depth for scoring the surface (mm)
    pub scoring_depth: f64,
    /// Safe height where travel moves cannot drag the needle through stock (mm)
    pub travel_depth: f64,
    /// Feed rates
    pub feed_rates: FeedRates,
    /// Offset aligning the drawing origin with the machine's work origin
    pub translation: Point,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            cutting_depth: 0.0,
            scoring_depth: 5.0,
            travel_depth: 20.0,
            feed_rates: FeedRates::default(),
            translation: Point::origin(),
        }
    }
}

impl MachineConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Working depth for a role
    pub fn working_depth(&self, role: Role) -> f64 {
        match role {
            Role::Cut => self.cutting_depth,
            Role::Score => self.scoring_depth,
        }
    }

    /// Set the translation so the drawing's lower-left corner lands on the
    /// work origin, optionally overriding either axis.
    pub fn with_auto_translation(
        mut self,
        bounds: Option<Bounds>,
        override_x: Option<f64>,
        override_y: Option<f64>,
    ) -> Self {
        let auto = bounds.map(|b| -b.min).unwrap_or_else(Point::origin);
        self.translation = Point::new(
            override_x.unwrap_or(auto.x()),
            override_y.unwrap_or(auto.y()),
        );
        self
    }

    /// Validate depths and feed rates.
    ///
    /// Feed rates must be positive whole numbers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("cutting_depth", self.cutting_depth),
            ("scoring_depth", self.scoring_depth),
            ("travel_depth", self.travel_depth),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidDepth {
                    name: name.to_string(),
                    value,
                });
            }
        }

        for role in [Role::Cut, Role::Score] {
            let depth = self.working_depth(role);
            if self.travel_depth <= depth {
                return Err(ConfigError::TravelDepthTooLow {
                    travel_depth: self.travel_depth,
                    role: role.to_string(),
                    depth,
                });
            }
        }

        let rates = &self.feed_rates;
        for (name, value) in [
            ("travel", rates.travel),
            ("cutting", rates.cutting),
            ("plunge", rates.plunge),
            ("retract", rates.retract),
        ] {
            // G-code output writes feeds as integers
            if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 {
                return Err(ConfigError::InvalidFeedRate {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Axis-aligned bounding box of a drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner
    pub min: Point,
    /// Maximum corner
    pub max: Point,
}

impl Bounds {
    /// Bounds of every point in `paths`, `None` when there are no points
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a MachinePath>) -> Option<Self> {
        let mut points = paths.into_iter().flat_map(|p| p.points().iter());
        let first = points.next()?;

        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (first.x(), first.y());
        for p in points {
            min_x = min_x.min(p.x());
            min_y = min_y.min(p.y());
            max_x = max_x.max(p.x());
            max_y = max_y.max(p.y());
        }

        Some(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    /// Width along X
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Height along Y
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}
