//! Reading and writing of the two XYZ dialects.
//!
//! - [`standard`] – `count` / `comment` header, then `symbol x y z` lines.
//! - [`computem`] – title and cell lines, then `Z x y z occupancy vibration`
//!   lines terminated by `-1`.
//!
//! Readers take any [`BufRead`](std::io::BufRead) and load the whole file;
//! writers take any [`Write`](std::io::Write).

use std::fmt;

pub mod computem;
pub mod error;
pub mod standard;
pub mod util;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Standard,
    Computem,
}

impl Format {
    /// Suffix appended to the input file stem when writing this format.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            Format::Standard => "-std.xyz",
            Format::Computem => "-computem.xyz",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Standard => write!(f, "standard XYZ"),
            Format::Computem => write!(f, "computem XYZ"),
        }
    }
}
