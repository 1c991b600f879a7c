//! # Foamcut CAM Tools
//!
//! This crate turns classified machine paths into a cutting program for a
//! needle or hot-wire foam cutter.
//!
//! ## Stages
//!
//! - **Consolidator**: chains fragments that share endpoints into maximal paths
//! - **Tour**: orders paths and picks their direction to shorten travel
//! - **Code Builder**: emits Z and X/Y moves under the machine's motion rules
//! - **State**: the tool position and coordinate mode the code builder tracks
//! - **Program**: the emitted instruction stream and its G-code text

pub mod code_builder;
pub mod consolidator;
pub mod error;
pub mod program;
pub mod state;
pub mod tour;

// Re-export commonly used items
pub use code_builder::{generate, CodeBuilder};
pub use consolidator::{consolidate, PathConsolidator, PathId};
pub use error::{CamToolError, CamToolResult};
pub use program::{Instruction, Program};
pub use state::MachineState;
pub use tour::{plan_tour, total_travel, NearestEndpoint, PlannedPath, TourPlanner};
