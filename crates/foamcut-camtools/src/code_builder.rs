//! Move emission and program assembly.
//!
//! [`CodeBuilder`] owns the machine state and the program being built. Every
//! motion goes through [`CodeBuilder::emit_move`], which enforces the motion
//! model:
//! - Z moves are absolute and never share an instruction with X/Y motion
//! - X/Y moves are relative displacements from the tracked position
//! - Moves to the current position (within tolerance) emit nothing

use crate::consolidator::consolidate;
use crate::error::CamToolResult;
use crate::program::{Instruction, Program};
use crate::state::MachineState;
use crate::tour::{NearestEndpoint, TourPlanner};
use foamcut_core::{CoordinateMode, MachineConfig, MachinePath, MotionError, Point, Role};
use tracing::{debug, info};

/// Builds a cutting program from machine paths
pub struct CodeBuilder<P = NearestEndpoint> {
    config: MachineConfig,
    state: MachineState,
    program: Program,
    planner: P,
}

impl CodeBuilder {
    /// Create a builder using the nearest-endpoint tour planner
    pub fn new(config: MachineConfig) -> Self {
        Self::with_planner(config, NearestEndpoint)
    }
}

impl<P: TourPlanner> CodeBuilder<P> {
    /// Create a builder with a custom tour planner
    pub fn with_planner(config: MachineConfig, planner: P) -> Self {
        Self {
            state: MachineState::new(&config),
            config,
            program: Program::new(),
            planner,
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Program emitted so far
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    /// Switch coordinate mode, emitting only on change
    pub fn set_mode(&mut self, mode: CoordinateMode) {
        if self.state.mode() != mode {
            self.program.push(Instruction::SetMode(mode));
            self.state.set_mode(mode);
        }
    }

    /// Append a comment line
    pub fn comment(&mut self, text: impl Into<String>) {
        self.program.push(Instruction::Comment(text.into()));
    }

    /// Append an operator display message
    pub fn message(&mut self, text: impl Into<String>) {
        self.program.push(Instruction::Message(text.into()));
    }

    /// Move the tool to `(x, y, z)`.
    ///
    /// A Z change must keep X and Y where they are; asking for both fails
    /// with [`MotionError::InvalidCombinedMove`] and leaves the state as it
    /// was. The stored position is the requested target, not the rounded
    /// one.
    pub fn emit_move(&mut self, x: f64, y: f64, z: f64, comment: Option<&str>) -> CamToolResult<()> {
        if self.state.at(x, y, z) {
            self.state.set_position(x, y, z);
            return Ok(());
        }

        let rates = self.config.feed_rates;
        if !foamcut_core::coordinate_equals(z, self.state.z()) {
            if Point::new(x, y) != self.state.position() {
                return Err(MotionError::InvalidCombinedMove {
                    from: (self.state.x(), self.state.y(), self.state.z()),
                    to: (x, y, z),
                }
                .into());
            }

            self.set_mode(CoordinateMode::Absolute);
            let instruction = if z > self.state.z() {
                Instruction::RetractZ {
                    z,
                    feed: rates.retract,
                }
            } else {
                Instruction::PlungeZ {
                    z,
                    feed: rates.plunge,
                }
            };
            self.program.push(instruction);
            if let Some(text) = comment {
                self.comment(text);
            }
        } else {
            self.set_mode(CoordinateMode::Relative);
            let dx = x - self.state.x();
            let dy = y - self.state.y();
            let comment = comment.map(str::to_string);
            let instruction = if self.state.cutting_or_scoring() {
                Instruction::Cut {
                    dx,
                    dy,
                    feed: rates.cutting,
                    comment,
                }
            } else {
                Instruction::Travel {
                    dx,
                    dy,
                    feed: rates.travel,
                    comment,
                }
            };
            self.program.push(instruction);
        }

        self.state.set_position(x, y, z);
        Ok(())
    }

    fn retract(&mut self, comment: Option<&str>) -> CamToolResult<()> {
        let (x, y) = (self.state.x(), self.state.y());
        self.emit_move(x, y, self.config.travel_depth, comment)
    }

    /// Assemble the complete program for `paths`.
    ///
    /// Scoring paths run before cutting paths. Each group is ordered by the
    /// tour planner, starting from wherever the tool currently is.
    pub fn build_program(mut self, paths: Vec<MachinePath>) -> CamToolResult<Program> {
        self.config.validate()?;

        self.program.push(Instruction::SetMode(CoordinateMode::Absolute));
        self.state.set_mode(CoordinateMode::Absolute);
        self.retract(None)?;

        let origin = -self.config.translation;
        let z = self.state.z();
        self.state.set_position(origin.x(), origin.y(), z);
        self.comment(format!("machine state coordinates reset to {}", origin));

        let (scoring, cutting): (Vec<_>, Vec<_>) =
            paths.into_iter().partition(|p| p.role() == Role::Score);
        self.generate_moves(Role::Score, scoring)?;
        self.generate_moves(Role::Cut, cutting)?;

        self.retract(Some("cutting complete, retracting cutter"))?;
        let z = self.state.z();
        self.emit_move(
            origin.x(),
            origin.y(),
            z,
            Some("return to starting coordinates"),
        )?;

        info!(
            instructions = self.program.len(),
            motions = self.program.motions().count(),
            "built cutting program"
        );
        Ok(self.program)
    }

    fn generate_moves(&mut self, role: Role, paths: Vec<MachinePath>) -> CamToolResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let depth = self.config.working_depth(role);
        let total = paths.len();
        let tour = self.planner.plan(self.state.position(), paths)?;

        for (index, planned) in tour.into_iter().enumerate() {
            let path = planned.path;
            let first = path.first()?;
            let last = path.last()?;
            debug!(%role, index, travel = planned.travel, points = path.len(), "emitting path");

            self.comment(format!(
                "beginning new {} path at {} ({}) requiring travel of {:.2}",
                role,
                first,
                if planned.reversed {
                    "inverted"
                } else {
                    "non-inverted"
                },
                planned.travel
            ));
            self.comment(format!(
                "this is path {}, {} remain",
                index + 1,
                total - index - 1
            ));
            self.comment(format!("this path begins at {} and ends at {}", first, last));
            self.message(format!("Path {}/{}", index + 1, total));

            if !self.state.at_xy(first.x(), first.y()) {
                if self.state.cutting_or_scoring() {
                    self.retract(None)?;
                }
                let note = format!("moving to start of path at (abs) {}", first);
                self.emit_move(first.x(), first.y(), self.config.travel_depth, Some(note.as_str()))?;
            }

            let (x, y) = (self.state.x(), self.state.y());
            self.emit_move(x, y, depth, None)?;
            for point in path.points().iter().skip(1) {
                self.emit_move(point.x(), point.y(), depth, None)?;
            }
        }

        Ok(())
    }
}

/// Consolidate `paths` and build the program for them
pub fn generate(
    config: MachineConfig,
    paths: impl IntoIterator<Item = MachinePath>,
) -> CamToolResult<Program> {
    CodeBuilder::new(config).build_program(consolidate(paths))
}
