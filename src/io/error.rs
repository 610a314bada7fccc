use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line {line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("{format} file must start with two header lines, found {found}")]
    MissingHeader { format: Format, found: usize },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    /// Returns `true` for problems with the contents of a single file.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingHeader { .. })
    }
}
