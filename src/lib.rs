//! Conversion between standard XYZ and computem XYZ atomic coordinate files.
//!
//! Standard XYZ is the plain format written by most crystal and molecular
//! viewers: an atom count, a comment line, then `symbol x y z` per atom.
//! The computem flavour used by the computem electron microscopy simulation
//! package starts with a title and a unit cell line, lists atoms as
//! `Z x y z occupancy vibration`, and ends with `-1`.
//!
//! # Quick Start
//!
//! ```
//! use computem_xyz::io::{computem, standard};
//! use computem_xyz::{PeriodicTable, to_computem};
//!
//! let input = "2\nsilicon pair\nSi 0.0 0.0 0.0\nSi 2.35 1.2 0.5\n";
//! let xyz = standard::reader::read(input.as_bytes())?;
//!
//! let converted = to_computem(&xyz, &PeriodicTable, 0.08, None)?;
//! assert_eq!(converted.atoms[0].atomic_number, 14);
//!
//! let mut out = Vec::new();
//! computem::writer::write(&mut out, &converted)?;
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().nth(1), Some("  2.35   1.2   0.5"));
//! assert_eq!(text.lines().last(), Some("-1"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Elements, atom records, unit cell and whole-file record sets
//! - [`io`] — Readers and writers for both dialects
//! - [`convert`] — Standard ⇄ computem conversion and its configuration
//! - [`pipeline`] — File and batch processing with per-file error isolation

pub mod convert;
pub mod io;
pub mod model;
pub mod pipeline;

pub use model::atom::{ComputemAtom, StandardAtom};
pub use model::cell::{CellBounds, CellOverride, CellSize, ParseCellError};
pub use model::element::{Element, ElementLookup, LookupError, ParseElementError, PeriodicTable};
pub use model::structure::{ComputemXyz, StandardXyz};

pub use convert::{
    ConvertConfig, DEFAULT_THERMAL_VIBRATION, Direction, LookupPolicy, output_path, to_computem,
    to_standard,
};

pub use pipeline::{
    BatchError, BatchOutcome, FileReport, Reporter, Severity, Silent, convert_file, run_batch,
};
