use computem_xyz::{CellOverride, ConvertConfig, Direction, LookupPolicy, ParseCellError};

use crate::cli::{Cli, UnknownElementPolicy};

/// Builds the library configuration from the command line.
///
/// An invalid `--cell-size` does not stop the run: it is dropped and the
/// error is returned alongside so the caller can warn about it.
pub fn build_convert_config(cli: &Cli) -> (ConvertConfig, Option<ParseCellError>) {
    let (cell_size, cell_error) = match resolve_cell_size(cli.computem.cell_size.as_deref()) {
        Ok(cell) => (cell, None),
        Err(e) => (None, Some(e)),
    };

    let config = ConvertConfig {
        direction: if cli.reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        },
        output_dir: cli.output_dir.clone(),
        verbose: cli.verbose,
        thermal_vibration: cli.computem.thermal_vibration,
        cell_size,
        lookup_policy: cli.on_unknown_element.into(),
    };

    (config, cell_error)
}

pub fn resolve_cell_size(raw: Option<&str>) -> Result<Option<CellOverride>, ParseCellError> {
    raw.map(str::parse).transpose()
}

impl From<UnknownElementPolicy> for LookupPolicy {
    fn from(policy: UnknownElementPolicy) -> Self {
        match policy {
            UnknownElementPolicy::Abort => LookupPolicy::AbortRun,
            UnknownElementPolicy::SkipFile => LookupPolicy::SkipFile,
        }
    }
}
