//! Data structures for the two XYZ dialects.
//!
//! - [`element`] – Periodic table and the [`ElementLookup`](element::ElementLookup) seam.
//! - [`atom`] – Per-atom records of each dialect.
//! - [`cell`] – Unit cell bounds and user overrides.
//! - [`structure`] – Whole-file record sets.
//!
//! A file is parsed into one of the record sets in [`structure`], converted to
//! the other by [`crate::convert`], then written back out by [`crate::io`].

pub mod atom;
pub mod cell;
pub mod element;
pub mod structure;
