//! # Foamcut
//!
//! Converts classified drawing fragments into G-code programs for needle
//! (foam) cutters.
//!
//! ## Architecture
//!
//! Foamcut is organized as a workspace with multiple crates:
//!
//! 1. **foamcut-core** - Points, paths, classification, machine config and state
//! 2. **foamcut-settings** - Settings files (JSON/TOML) and validation
//! 3. **foamcut-camtools** - Consolidation, tour planning, move emission
//! 4. **foamcut** - This crate, which wires the stages into one pipeline
//!
//! ## Pipeline
//!
//! Drawing fragments are classified by stroke color and group, chained into
//! maximal paths, ordered greedily by nearest endpoint and emitted as a
//! G-code program. Geometry extraction and the command line live outside
//! this workspace.

use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use foamcut_camtools::{
    consolidate, plan_tour, CamToolError, CodeBuilder, Instruction, MachineState,
    NearestEndpoint, PlannedPath, Program, TourPlanner,
};
pub use foamcut_core::{
    Bounds, Classification, ClassifiedFragment, ConfigError, CoordinateMode, FeedRates,
    MachineConfig, MachinePath, MotionError, PathError, Point, RawFragment, RgbColor, Role,
    RoleClassifier,
};
pub use foamcut_settings::{ClassificationSettings, Settings, SettingsError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date, set by the build script
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout free for program text
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    tracing::info!(version = VERSION, build_date = BUILD_DATE, "foamcut logging initialized");
    Ok(())
}

/// Classify raw fragments and convert the kept ones into machine paths
pub fn classify_paths(
    fragments: impl IntoIterator<Item = RawFragment>,
    classifier: &RoleClassifier,
) -> anyhow::Result<Vec<MachinePath>> {
    let mut paths = Vec::new();
    let mut ignored = 0usize;
    for fragment in classifier.classify_all(fragments) {
        match fragment.into_path() {
            Some(path) => paths.push(path.context("Fragment has no points")?),
            None => ignored += 1,
        }
    }

    if paths.is_empty() && ignored > 0 {
        tracing::warn!(ignored, "every fragment was ignored by the classifier");
    } else {
        tracing::debug!(kept = paths.len(), ignored, "classified fragments");
    }
    Ok(paths)
}

/// Run the full pipeline with the configured translation
pub fn generate_program(
    fragments: impl IntoIterator<Item = RawFragment>,
    settings: &Settings,
) -> anyhow::Result<Program> {
    let paths = classify_paths(fragments, &settings.classification.classifier())?;
    build(settings.machine, paths)
}

/// Run the full pipeline, moving the drawing's lower-left corner to the
/// work origin.
///
/// `override_x` and `override_y` replace the computed translation per axis.
pub fn generate_program_auto_origin(
    fragments: impl IntoIterator<Item = RawFragment>,
    settings: &Settings,
    override_x: Option<f64>,
    override_y: Option<f64>,
) -> anyhow::Result<Program> {
    let paths = classify_paths(fragments, &settings.classification.classifier())?;
    let bounds = Bounds::from_paths(&paths);
    let config = settings
        .machine
        .with_auto_translation(bounds, override_x, override_y);
    tracing::debug!(translation = %config.translation, "computed translation");
    build(config, paths)
}

fn build(config: MachineConfig, paths: Vec<MachinePath>) -> anyhow::Result<Program> {
    let paths = consolidate(paths);
    let program = CodeBuilder::new(config)
        .build_program(paths)
        .context("Failed to build cutting program")?;
    Ok(program)
}

/// Write a program to a G-code file
pub fn write_program(program: &Program, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    program
        .write_to(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), lines = program.len(), "wrote program");
    Ok(())
}
