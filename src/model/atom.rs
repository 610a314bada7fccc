/// One atom of a standard XYZ file: a chemical symbol and a Cartesian position.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardAtom {
    pub element: String,
    pub position: [f64; 3],
}

impl StandardAtom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            element: element.into(),
            position,
        }
    }
}

/// One atom of a computem XYZ file.
///
/// Occupancy is always written as `1`; the value read from an input file is
/// kept only for completeness. The atomic number is any integer read from the
/// file, so out-of-range values surface as lookup errors during conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputemAtom {
    pub atomic_number: i64,
    pub position: [f64; 3],
    pub occupancy: f64,
    pub thermal_vibration: f64,
}

impl ComputemAtom {
    pub fn new(atomic_number: i64, position: [f64; 3], thermal_vibration: f64) -> Self {
        Self {
            atomic_number,
            position,
            occupancy: 1.0,
            thermal_vibration,
        }
    }
}
