use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCellError {
    #[error("expected three comma-separated values, found {0}")]
    WrongValueCount(usize),

    #[error("cell size value '{0}' is not a number")]
    NotANumber(String),
}

/// Per-axis maximum coordinate of a set of atoms.
///
/// The cell origin is taken to be `(0, 0, 0)`, so the maximum along each
/// axis is the cell edge length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellBounds {
    pub max: [f64; 3],
}

impl CellBounds {
    /// Computes the bounds of the given positions. An empty set yields zeros.
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a [f64; 3]>) -> Self {
        let mut axes: [Vec<f64>; 3] = Default::default();
        for pos in positions {
            for (axis, value) in axes.iter_mut().zip(pos) {
                axis.push(*value);
            }
        }

        let mut max = [0.0; 3];
        for (slot, mut values) in max.iter_mut().zip(axes) {
            values.sort_by(f64::total_cmp);
            if let Some(last) = values.last() {
                *slot = *last;
            }
        }
        Self { max }
    }
}

/// An explicit unit cell size given by the user as `"x,y,z"`.
///
/// The values are validated as numbers but kept as typed so that they are
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOverride {
    values: [String; 3],
}

impl CellOverride {
    pub fn values(&self) -> &[String; 3] {
        &self.values
    }
}

impl FromStr for CellOverride {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        let [x, y, z] = parts.as_slice() else {
            return Err(ParseCellError::WrongValueCount(parts.len()));
        };

        for value in [x, y, z] {
            if value.parse::<f64>().is_err() {
                return Err(ParseCellError::NotANumber(value.to_string()));
            }
        }

        Ok(Self {
            values: [x.to_string(), y.to_string(), z.to_string()],
        })
    }
}

/// The cell line of a computem file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellSize {
    /// Derived from the atom coordinates.
    Computed(CellBounds),
    /// Supplied by the user, written verbatim.
    Override(CellOverride),
    /// Read from an existing computem file and not interpreted.
    Raw(String),
}
