use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::util::text::truncate;

const MAX_NAME_WIDTH: usize = 40;

pub struct FileSpinner {
    bar: ProgressBar,
    start: Instant,
}

impl FileSpinner {
    pub fn new(total_files: usize) -> Self {
        let bar = ProgressBar::new(total_files as u64);
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} [{pos}/{len}] {msg}")
                .expect("invalid template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            start: Instant::now(),
        }
    }

    pub fn start_file(&self, name: &str) {
        self.bar
            .set_message(format!("Converting {}...", truncate(name, MAX_NAME_WIDTH)));
    }

    pub fn finish_file(&self) {
        self.bar.inc(1);
    }

    /// Prints a line without tearing the spinner.
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
        eprintln!(
            "  \x1b[32m✓\x1b[0m {} file(s) processed {:>20}",
            self.bar.position(),
            format!("Total: {:.2}s", self.start.elapsed().as_secs_f64())
        );
    }
}

pub enum Progress {
    Interactive(FileSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_files: usize) -> Self {
        if interactive {
            Self::Interactive(FileSpinner::new(total_files))
        } else {
            Self::Silent
        }
    }

    pub fn start_file(&self, name: &str) {
        if let Self::Interactive(s) = self {
            s.start_file(name);
        }
    }

    pub fn finish_file(&self) {
        if let Self::Interactive(s) = self {
            s.finish_file();
        }
    }

    pub fn println(&self, line: &str) {
        match self {
            Self::Interactive(s) => s.println(line),
            Self::Silent => println!("{line}"),
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(s) = self {
            s.finish();
        }
    }
}
