//! Machine configuration and coordinate modes.
//!
//! ## Modules
//!
//! - [`config`]: depths, feed rates and drawing translation
//! - [`mode`]: absolute and relative coordinate interpretation

pub mod config;
pub mod mode;

pub use config::{Bounds, FeedRates, MachineConfig};
pub use mode::CoordinateMode;
