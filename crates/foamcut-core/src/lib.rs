//! # Foamcut Core
//!
//! Core types and utilities for foamcut.
//! Provides the shared data model for path consolidation, tour planning and
//! move emission: points, machine paths, fragment classification, machine
//! configuration and coordinate modes.

pub mod classify;
pub mod error;
pub mod machine;
pub mod path;
pub mod point;
pub mod tolerance;

pub use classify::{Classification, ClassifiedFragment, RawFragment, RgbColor, RoleClassifier};
pub use error::{ConfigError, MotionError, PathError};
pub use machine::{Bounds, CoordinateMode, FeedRates, MachineConfig};
pub use path::{MachinePath, Role};
pub use point::Point;
pub use tolerance::{coordinate_equals, COORDINATE_EPSILON, POINT_PRECISION};
