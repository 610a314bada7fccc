//! Per-file conversion and the batch loop around it.
//!
//! Each input is read, parsed, converted and rendered entirely in memory; the
//! output file is only touched once all of that succeeded. Failures are
//! classified by [`Error::severity`]: file-scoped failures are recorded in the
//! [`BatchOutcome`] and the batch moves on, fatal ones stop it.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::convert::{self, ConvertConfig, Direction, LookupPolicy};
use crate::io::{self, computem, standard};
use crate::model::element::{ElementLookup, LookupError};
use crate::model::structure::{ComputemXyz, StandardXyz};

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{}': {source}", .path.display())]
    Format {
        path: PathBuf,
        source: io::Error,
    },

    #[error("'{}': {source}", .path.display())]
    Lookup {
        path: PathBuf,
        source: LookupError,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only the current file is abandoned.
    FileScoped,
    /// The whole batch stops.
    Fatal,
}

impl Error {
    pub fn severity(&self, policy: LookupPolicy) -> Severity {
        match self {
            Error::Format { source, .. } if source.is_format_error() => Severity::FileScoped,
            Error::Lookup { .. } if policy == LookupPolicy::SkipFile => Severity::FileScoped,
            _ => Severity::Fatal,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::Open { path, .. }
            | Error::Format { path, .. }
            | Error::Lookup { path, .. }
            | Error::Write { path, .. } => path,
        }
    }
}

/// Progress notifications from the pipeline.
///
/// All methods default to doing nothing.
pub trait Reporter {
    fn file_started(&mut self, _input: &Path) {}

    /// A converted atom line, only sent when `verbose` is set.
    fn atom_line(&mut self, _line: &str) {}

    fn warning(&mut self, _input: &Path, _message: &str) {}

    fn file_converted(&mut self, _report: &FileReport) {}

    fn file_failed(&mut self, _error: &Error) {}
}

/// A [`Reporter`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub atom_count: usize,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub converted: Vec<FileReport>,
    pub failed: Vec<Error>,
}

impl BatchOutcome {
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// A fatal error that stopped a batch, with whatever was done before it.
#[derive(Debug, Error)]
#[error("conversion aborted after {} converted file(s)", .completed.converted.len())]
pub struct BatchError {
    pub completed: BatchOutcome,
    #[source]
    pub source: Error,
}

enum Converted {
    Computem(ComputemXyz),
    Standard(StandardXyz),
}

impl Converted {
    fn atom_count(&self) -> usize {
        match self {
            Converted::Computem(xyz) => xyz.atom_count(),
            Converted::Standard(xyz) => xyz.atom_count(),
        }
    }

    fn atom_lines(&self) -> Vec<String> {
        match self {
            Converted::Computem(xyz) => xyz
                .atoms
                .iter()
                .map(computem::writer::format_atom)
                .collect(),
            Converted::Standard(xyz) => xyz
                .atoms
                .iter()
                .map(standard::writer::format_atom)
                .collect(),
        }
    }

    fn render(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::new();
        match self {
            Converted::Computem(xyz) => computem::writer::write(&mut buf, xyz)?,
            Converted::Standard(xyz) => standard::writer::write(&mut buf, xyz)?,
        }
        Ok(buf)
    }
}

/// Converts one file and writes the result next to it or into
/// `config.output_dir`. Nothing is written if any step fails.
pub fn convert_file(
    input: &Path,
    config: &ConvertConfig,
    lookup: &impl ElementLookup,
    reporter: &mut impl Reporter,
) -> Result<FileReport, Error> {
    reporter.file_started(input);

    let file = File::open(input).map_err(|source| Error::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let format_err = |source| Error::Format {
        path: input.to_path_buf(),
        source,
    };
    let lookup_err = |source| Error::Lookup {
        path: input.to_path_buf(),
        source,
    };

    let converted = match config.direction {
        Direction::Forward => {
            let xyz = standard::reader::read(reader).map_err(format_err)?;
            if let Some(declared) = xyz.declared_count() {
                if declared != xyz.atom_count() {
                    reporter.warning(
                        input,
                        &format!(
                            "header declares {} atoms but {} were read",
                            declared,
                            xyz.atom_count()
                        ),
                    );
                }
            }
            let out = convert::to_computem(
                &xyz,
                lookup,
                config.thermal_vibration,
                config.cell_size.as_ref(),
            )
            .map_err(lookup_err)?;
            Converted::Computem(out)
        }
        Direction::Reverse => {
            let xyz = computem::reader::read(reader).map_err(format_err)?;
            Converted::Standard(convert::to_standard(&xyz, lookup).map_err(lookup_err)?)
        }
    };

    if config.verbose {
        for line in converted.atom_lines() {
            reporter.atom_line(&line);
        }
    }

    let output = convert::output_path(input, config.direction, config.output_dir.as_deref());
    let write_err = |source| Error::Write {
        path: output.clone(),
        source,
    };
    let bytes = converted.render().map_err(write_err)?;
    replace_file(&output, &bytes).map_err(|e| write_err(e.into()))?;

    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        atom_count: converted.atom_count(),
    })
}

/// Deletes any existing file at `path`, then writes `bytes` to it.
fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::write(path, bytes)
}

/// Converts `inputs` in order.
///
/// File-scoped failures are collected in the returned [`BatchOutcome`]; the
/// first fatal failure stops the batch and is returned as a [`BatchError`].
pub fn run_batch<P: AsRef<Path>>(
    inputs: &[P],
    config: &ConvertConfig,
    lookup: &impl ElementLookup,
    reporter: &mut impl Reporter,
) -> Result<BatchOutcome, BatchError> {
    inputs
        .iter()
        .try_fold(BatchOutcome::default(), |mut outcome, input| {
            match convert_file(input.as_ref(), config, lookup, reporter) {
                Ok(report) => {
                    reporter.file_converted(&report);
                    outcome.converted.push(report);
                    Ok(outcome)
                }
                Err(err) => match err.severity(config.lookup_policy) {
                    Severity::FileScoped => {
                        reporter.file_failed(&err);
                        outcome.failed.push(err);
                        Ok(outcome)
                    }
                    Severity::Fatal => Err(BatchError {
                        completed: outcome,
                        source: err,
                    }),
                },
            }
        })
}
