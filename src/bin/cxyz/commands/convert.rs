use anyhow::Result;

use computem_xyz::{BatchOutcome, DEFAULT_THERMAL_VIBRATION, Direction, PeriodicTable, run_batch};

use crate::cli::Cli;
use crate::config::build_convert_config;
use crate::display::{Console, Context, Progress};

/// How a run that went through every input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    FilesFailed,
}

pub fn run_convert(cli: Cli, ctx: Context) -> Result<Status> {
    let (config, cell_error) = build_convert_config(&cli);

    let mut console = Console::new(Progress::new(ctx.interactive, cli.inputs.len()));

    if let Some(e) = cell_error {
        console.warn(&format!(
            "Ignoring --cell-size: {e}; using maximum atom coordinates instead"
        ));
    }
    if config.direction == Direction::Reverse
        && (cli.computem.cell_size.is_some()
            || cli.computem.thermal_vibration != DEFAULT_THERMAL_VIBRATION)
    {
        console.warn("--cell-size and --thermal-vibration only apply to forward conversion");
    }

    let outcome = match run_batch(&cli.inputs, &config, &PeriodicTable, &mut console) {
        Ok(outcome) => outcome,
        Err(e) => {
            console.error("Conversion aborted. Error(s) occurred.");
            console.finish();
            return Err(e.into());
        }
    };

    let (status, summary) = summarize(&outcome);
    match status {
        Status::Clean => console.info(&summary),
        Status::FilesFailed => console.error(&summary),
    }

    console.finish();
    Ok(status)
}

fn summarize(outcome: &BatchOutcome) -> (Status, String) {
    if outcome.has_errors() {
        let line = format!(
            "Finished: {} converted, {} failed. Error(s) occurred.",
            outcome.converted.len(),
            outcome.failed.len()
        );
        (Status::FilesFailed, line)
    } else {
        let line = format!(
            "Finished: {} converted with no error.",
            outcome.converted.len()
        );
        (Status::Clean, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use computem_xyz::{ConvertConfig, Silent};
    use std::ffi::OsString;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SI_O: &str = "2\nsilicon oxide\nSi 5.0 0.0 0.3\nO 1.0 3.2 1.1\n";

    fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write input");
        path
    }

    fn cli(inputs: &[PathBuf]) -> Cli {
        let mut args = vec![OsString::from("cxyz")];
        args.extend(inputs.iter().map(|p| p.as_os_str().to_owned()));
        Cli::try_parse_from(args).expect("parse cli")
    }

    fn batch_context() -> Context {
        Context { interactive: false }
    }

    #[test]
    fn clean_batch_reports_no_error() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_input(&dir, "a.xyz", SI_O),
            write_input(&dir, "b.xyz", SI_O),
        ];

        let status = run_convert(cli(&inputs), batch_context()).unwrap();
        assert_eq!(status, Status::Clean);
        assert!(dir.path().join("b-computem.xyz").is_file());
    }

    #[test]
    fn malformed_file_marks_run_as_failed() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write_input(&dir, "a.xyz", SI_O),
            write_input(&dir, "bad.xyz", "1\nc\nSi 0 0\n"),
        ];

        let status = run_convert(cli(&inputs), batch_context()).unwrap();
        assert_eq!(status, Status::FilesFailed);
        assert!(dir.path().join("a-computem.xyz").is_file());
        assert!(!dir.path().join("bad-computem.xyz").exists());
    }

    #[test]
    fn unknown_element_aborts_run() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![write_input(&dir, "a.xyz", "1\nc\nXx 0 0 0\n")];

        assert!(run_convert(cli(&inputs), batch_context()).is_err());
    }

    #[test]
    fn summary_line_distinguishes_failures() {
        let clean = BatchOutcome::default();
        assert_eq!(
            summarize(&clean),
            (Status::Clean, "Finished: 0 converted with no error.".to_string())
        );

        let dir = TempDir::new().unwrap();
        let missing_header = write_input(&dir, "empty.xyz", "");
        let outcome = run_batch(
            &[missing_header],
            &ConvertConfig::default(),
            &PeriodicTable,
            &mut Silent,
        )
        .unwrap();
        assert_eq!(
            summarize(&outcome),
            (
                Status::FilesFailed,
                "Finished: 0 converted, 1 failed. Error(s) occurred.".to_string()
            )
        );
    }
}
