use super::atom::{ComputemAtom, StandardAtom};
use super::cell::CellSize;

/// Parsed contents of a standard XYZ file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardXyz {
    /// First header line, normally the number of atoms.
    pub count_line: String,
    /// Second header line, free text.
    pub comment: String,
    pub atoms: Vec<StandardAtom>,
}

impl StandardXyz {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// The atom count declared on the first header line, if it is an integer.
    pub fn declared_count(&self) -> Option<usize> {
        self.count_line.trim().parse().ok()
    }

    /// Both header lines joined by `", "`, as used for a computem title.
    pub fn joined_header(&self) -> String {
        format!("{}, {}", self.count_line, self.comment)
    }
}

/// Parsed contents of a computem XYZ file.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputemXyz {
    /// First line, free text.
    pub title: String,
    /// Second line: the unit cell size.
    pub cell: CellSize,
    pub atoms: Vec<ComputemAtom>,
}

impl ComputemXyz {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}
