use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    use computem_xyz::BatchError;
    use computem_xyz::pipeline::Error as PipelineError;

    let pipeline_err = err
        .downcast_ref::<BatchError>()
        .map(|b| &b.source)
        .or_else(|| err.downcast_ref::<PipelineError>());

    let Some(pipeline_err) = pipeline_err else {
        return Vec::new();
    };

    match pipeline_err {
        PipelineError::Open { source, .. } => std_io_hints(source),

        PipelineError::Write { source, .. } => {
            let mut hints = vec!["Check that the output directory is writable".to_string()];
            if let computem_xyz::io::Error::Io { source } = source {
                hints.extend(std_io_hints(source));
            }
            hints
        }

        PipelineError::Lookup { source, .. } => lookup_hints(source),

        PipelineError::Format { source, .. } => {
            let mut hints = vec!["Inspect the file around the reported line".to_string()];
            if let computem_xyz::io::Error::Io { source } = source {
                hints.extend(std_io_hints(source));
            }
            hints
        }
    }
}

fn lookup_hints(err: &computem_xyz::LookupError) -> Vec<String> {
    use computem_xyz::LookupError;

    match err {
        LookupError::UnknownSymbol(symbol) => vec![
            format!("'{}' is not a chemical symbol", symbol),
            "Symbols are case-sensitive: write 'Si', not 'si' or 'SI'".to_string(),
            "Use --on-unknown-element skip-file to convert the remaining files".to_string(),
        ],
        LookupError::AtomicNumberOutOfRange(z) => vec![
            format!("Atomic number {} is not between 1 and 118", z),
            "Check that the file is in computem format (use --reverse only for computem input)"
                .to_string(),
            "Use --on-unknown-element skip-file to convert the remaining files".to_string(),
        ],
    }
}

fn std_io_hints(source: &std::io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    let hints: &[&str] = match source.kind() {
        ErrorKind::NotFound => &[
            "File or directory not found",
            "Check the path spelling and ensure the file exists",
        ],
        ErrorKind::PermissionDenied => &[
            "Permission denied accessing the file",
            "Check file permissions with `ls -la`",
        ],
        ErrorKind::InvalidData => &[
            "File is not valid UTF-8 text",
            "XYZ files must be plain text",
        ],
        ErrorKind::WriteZero => &["Failed to write data (disk full?)", "Check available disk space"],
        _ => &["I/O operation failed", "Check file path, permissions, and disk space"],
    };
    hints.iter().map(|h| h.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use computem_xyz::pipeline::Error as PipelineError;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn write_failure_hints_at_output_and_io_kind() {
        let err = Error::new(PipelineError::Write {
            path: PathBuf::from("out/a-computem.xyz"),
            source: computem_xyz::io::Error::from(std::io::Error::from(
                ErrorKind::PermissionDenied,
            )),
        });

        let hints = collect_hints(&err);
        assert_eq!(hints[0], "Check that the output directory is writable");
        assert!(hints.iter().any(|h| h == "Permission denied accessing the file"));
    }

    #[test]
    fn lookup_failure_suggests_skip_policy() {
        let err = Error::new(PipelineError::Lookup {
            path: PathBuf::from("a-computem.xyz"),
            source: computem_xyz::LookupError::AtomicNumberOutOfRange(-5),
        });

        let hints = collect_hints(&err);
        assert!(hints[0].contains("-5"));
        assert!(hints.iter().any(|h| h.contains("skip-file")));
    }
}
