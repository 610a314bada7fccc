//! Conversion between the standard and computem record sets.
//!
//! Element identities go through an injected
//! [`ElementLookup`](crate::model::element::ElementLookup); failures come back
//! as typed [`LookupError`](crate::model::element::LookupError)s so callers can
//! decide, via [`LookupPolicy`], whether they end the batch or just the file.

mod config;
mod transform;

pub use config::{ConvertConfig, DEFAULT_THERMAL_VIBRATION, Direction, LookupPolicy};
pub use transform::{to_computem, to_standard};

use std::path::{Path, PathBuf};

/// Output path for `input`: `<stem>-computem.xyz` or `<stem>-std.xyz`, in
/// `output_dir` when given, else beside the input.
pub fn output_path(input: &Path, direction: Direction, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!(
        "{}{}",
        stem.to_string_lossy(),
        direction.output_format().output_suffix()
    );
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_beside_input() {
        let path = output_path(Path::new("data/si.xyz"), Direction::Forward, None);
        assert_eq!(path, PathBuf::from("data/si-computem.xyz"));

        let path = output_path(Path::new("data/si.xyz"), Direction::Reverse, None);
        assert_eq!(path, PathBuf::from("data/si-std.xyz"));
    }

    #[test]
    fn output_path_in_output_dir() {
        let path = output_path(
            Path::new("data/si.xyz"),
            Direction::Forward,
            Some(Path::new("out")),
        );
        assert_eq!(path, PathBuf::from("out/si-computem.xyz"));
    }

    #[test]
    fn output_path_without_extension() {
        let path = output_path(Path::new("cell"), Direction::Reverse, None);
        assert_eq!(path, PathBuf::from("cell-std.xyz"));
    }
}
