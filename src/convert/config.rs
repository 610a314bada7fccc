use std::path::PathBuf;

use crate::io::Format;
use crate::model::cell::CellOverride;

/// Default RMS thermal vibration written to computem files, in Å.
pub const DEFAULT_THERMAL_VIBRATION: f64 = 0.08;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub direction: Direction,
    /// Directory for output files; `None` writes beside each input.
    pub output_dir: Option<PathBuf>,
    /// Report every converted atom line.
    pub verbose: bool,
    /// RMS thermal vibration in Å (forward only).
    pub thermal_vibration: f64,
    /// Explicit unit cell size (forward only).
    pub cell_size: Option<CellOverride>,
    pub lookup_policy: LookupPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            output_dir: None,
            verbose: false,
            thermal_vibration: DEFAULT_THERMAL_VIBRATION,
            cell_size: None,
            lookup_policy: LookupPolicy::AbortRun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Standard XYZ to computem XYZ.
    #[default]
    Forward,
    /// Computem XYZ to standard XYZ.
    Reverse,
}

impl Direction {
    pub fn input_format(&self) -> Format {
        match self {
            Direction::Forward => Format::Standard,
            Direction::Reverse => Format::Computem,
        }
    }

    pub fn output_format(&self) -> Format {
        match self {
            Direction::Forward => Format::Computem,
            Direction::Reverse => Format::Standard,
        }
    }
}

/// What an unknown element symbol or atomic number does to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// Stop the whole batch.
    #[default]
    AbortRun,
    /// Fail only the current file and carry on.
    SkipFile,
}
