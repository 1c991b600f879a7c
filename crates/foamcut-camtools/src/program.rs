//! Emitted instruction stream and its G-code text form.

use foamcut_core::CoordinateMode;
use std::fmt;
use std::io;

/// One line of a cutting program
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Switch coordinate interpretation (G90 / G91)
    SetMode(CoordinateMode),
    /// Raise Z in a rapid move (G0 Z)
    RetractZ { z: f64, feed: f64 },
    /// Lower Z in a controlled move (G1 Z)
    PlungeZ { z: f64, feed: f64 },
    /// Relative X/Y displacement with the tool clear of the material (G0)
    Travel {
        dx: f64,
        dy: f64,
        feed: f64,
        comment: Option<String>,
    },
    /// Relative X/Y displacement at a working depth (G1)
    Cut {
        dx: f64,
        dy: f64,
        feed: f64,
        comment: Option<String>,
    },
    /// Program comment
    Comment(String),
    /// Operator display message (M117)
    Message(String),
}

impl Instruction {
    /// Whether the instruction changes machine state
    pub fn is_motion(&self) -> bool {
        !matches!(self, Self::Comment(_) | Self::Message(_))
    }
}

// Displacements are differences of rounded coordinates; keep float noise
// from printing as "-0.000".
fn clean(value: f64) -> f64 {
    if value.abs() < 0.0005 {
        0.0
    } else {
        value
    }
}

fn write_comment(f: &mut fmt::Formatter<'_>, comment: &Option<String>) -> fmt::Result {
    match comment {
        Some(text) => write!(f, " ; {}", text),
        None => Ok(()),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetMode(CoordinateMode::Absolute) => write!(f, "G90"),
            Self::SetMode(CoordinateMode::Relative) => write!(f, "G91"),
            Self::RetractZ { z, feed } => write!(f, "G0 Z{:.3} F{:.0}", clean(*z), feed),
            Self::PlungeZ { z, feed } => write!(f, "G1 Z{:.3} F{:.0}", clean(*z), feed),
            Self::Travel {
                dx,
                dy,
                feed,
                comment,
            } => {
                write!(f, "G0 X{:.3} Y{:.3} F{:.0}", clean(*dx), clean(*dy), feed)?;
                write_comment(f, comment)
            }
            Self::Cut {
                dx,
                dy,
                feed,
                comment,
            } => {
                write!(f, "G1 X{:.3} Y{:.3} F{:.0}", clean(*dx), clean(*dy), feed)?;
                write_comment(f, comment)
            }
            Self::Comment(text) => write!(f, "; {}", text),
            Self::Message(text) => write!(f, "M117 {}", text),
        }
    }
}

/// An ordered cutting program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// All instructions in emission order
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instructions that change machine state, skipping comments and messages
    pub fn motions(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(|i| i.is_motion())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Write the program as G-code text, one instruction per line
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for instruction in &self.instructions {
            writeln!(writer, "{}", instruction)?;
        }
        writer.flush()
    }

    /// Render the program as G-code text
    pub fn to_gcode(&self) -> String {
        let mut gcode = String::new();
        for instruction in &self.instructions {
            gcode.push_str(&format!("{}\n", instruction));
        }
        gcode
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
