use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cxyz",
    about = "Convert standard XYZ files to computem XYZ files and back",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Input files, converted in the order given
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Convert computem XYZ to standard XYZ instead
    #[arg(short, long)]
    pub reverse: bool,

    /// Write outputs into DIR instead of beside each input
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print every converted atom line
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress banner and progress spinner (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub computem: ComputemOptions,

    /// What an unknown element symbol or atomic number does to the batch
    #[arg(long = "on-unknown-element", value_name = "POLICY", default_value = "abort")]
    pub on_unknown_element: UnknownElementPolicy,
}

/// Options that only apply when writing computem files.
#[derive(clap::Args, Debug)]
#[command(next_help_heading = "Computem Output")]
pub struct ComputemOptions {
    /// RMS thermal vibration written for every atom (Å)
    #[arg(
        short,
        long = "thermal-vibration",
        value_name = "Å",
        default_value = "0.08"
    )]
    pub thermal_vibration: f64,

    /// Unit cell size, overriding the maximum atom coordinates
    #[arg(short, long = "cell-size", value_name = "X,Y,Z")]
    pub cell_size: Option<String>,
}

#[derive(Clone, Copy, ValueEnum, Default, Debug)]
pub enum UnknownElementPolicy {
    /// Stop the whole batch
    #[default]
    Abort,
    /// Report the file as failed and continue with the next one
    SkipFile,
}

pub fn parse() -> Cli {
    Cli::parse()
}
