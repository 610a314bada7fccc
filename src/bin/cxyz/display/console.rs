use std::fmt;
use std::path::Path;

use computem_xyz::pipeline::{Error, FileReport, Reporter};

use super::Progress;

/// Severity tag printed in front of every console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
    Verbose,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "[INFO]"),
            Level::Warning => write!(f, "[WARNING]"),
            Level::Error => write!(f, "[ERROR]"),
            Level::Verbose => write!(f, "[VERBOSE]"),
        }
    }
}

pub fn tagged(level: Level, message: &str) -> String {
    format!("{level} {message}")
}

/// Tagged stdout output, routed around the spinner when there is one.
pub struct Console {
    progress: Progress,
}

impl Console {
    pub fn new(progress: Progress) -> Self {
        Self { progress }
    }

    pub fn log(&self, level: Level, message: &str) {
        self.progress.println(&tagged(level, message));
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn finish(self) {
        self.progress.finish();
    }
}

impl Reporter for Console {
    fn file_started(&mut self, input: &Path) {
        let name = input
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        self.progress.start_file(&name);
        self.info(&format!("Converting {}", input.display()));
    }

    fn atom_line(&mut self, line: &str) {
        self.log(Level::Verbose, line);
    }

    fn warning(&mut self, input: &Path, message: &str) {
        self.warn(&format!("{}: {}", input.display(), message));
    }

    fn file_converted(&mut self, report: &FileReport) {
        self.progress.finish_file();
        self.info(&format!(
            "Wrote {} atoms → {}",
            report.atom_count,
            report.output.display()
        ));
    }

    fn file_failed(&mut self, error: &Error) {
        self.progress.finish_file();
        self.error(&format!("{error}; no output written"));
    }
}
