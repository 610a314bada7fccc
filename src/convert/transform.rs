use crate::model::atom::{ComputemAtom, StandardAtom};
use crate::model::cell::{CellBounds, CellOverride, CellSize};
use crate::model::element::{ElementLookup, LookupError};
use crate::model::structure::{ComputemXyz, StandardXyz};

/// Converts a standard record set to computem.
///
/// The cell line is the per-axis maximum of the coordinates unless
/// `cell_size` is given, in which case it replaces the computed bounds.
pub fn to_computem(
    xyz: &StandardXyz,
    lookup: &impl ElementLookup,
    thermal_vibration: f64,
    cell_size: Option<&CellOverride>,
) -> Result<ComputemXyz, LookupError> {
    let atoms = xyz
        .atoms
        .iter()
        .map(|atom| {
            let z = lookup.atomic_number(&atom.element)?;
            Ok(ComputemAtom::new(i64::from(z), atom.position, thermal_vibration))
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    let cell = match cell_size {
        Some(cell) => CellSize::Override(cell.clone()),
        None => CellSize::Computed(CellBounds::from_positions(
            xyz.atoms.iter().map(|a| &a.position),
        )),
    };

    Ok(ComputemXyz {
        title: xyz.joined_header(),
        cell,
        atoms,
    })
}

/// Converts a computem record set to standard, dropping occupancy and
/// thermal vibration. The title becomes the comment line.
pub fn to_standard(
    xyz: &ComputemXyz,
    lookup: &impl ElementLookup,
) -> Result<StandardXyz, LookupError> {
    let atoms = xyz
        .atoms
        .iter()
        .map(|atom| {
            let symbol = lookup.symbol(atom.atomic_number)?;
            Ok(StandardAtom::new(symbol, atom.position))
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    Ok(StandardXyz {
        count_line: atoms.len().to_string(),
        comment: xyz.title.clone(),
        atoms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{computem, standard};
    use crate::model::element::PeriodicTable;
    use std::io::Cursor;

    fn standard_sample() -> StandardXyz {
        StandardXyz {
            count_line: "3".to_string(),
            comment: "test cell".to_string(),
            atoms: vec![
                StandardAtom::new("Si", [5.0, 0.0, 0.3]),
                StandardAtom::new("O", [1.0, 3.2, 1.1]),
                StandardAtom::new("Si", [2.5, 1.6, -0.4]),
            ],
        }
    }

    #[test]
    fn forward_maps_symbols_and_computes_bounds() {
        let out = to_computem(&standard_sample(), &PeriodicTable, 0.08, None).unwrap();

        assert_eq!(out.title, "3, test cell");
        assert_eq!(
            out.cell,
            CellSize::Computed(CellBounds {
                max: [5.0, 3.2, 1.1]
            })
        );
        let numbers: Vec<i64> = out.atoms.iter().map(|a| a.atomic_number).collect();
        assert_eq!(numbers, vec![14, 8, 14]);
        assert!(out.atoms.iter().all(|a| a.occupancy == 1.0));
        assert!(out.atoms.iter().all(|a| a.thermal_vibration == 0.08));
        assert_eq!(out.atoms[2].position, [2.5, 1.6, -0.4]);
    }

    #[test]
    fn forward_uses_requested_thermal_vibration() {
        let out = to_computem(&standard_sample(), &PeriodicTable, 0.12, None).unwrap();
        assert!(out.atoms.iter().all(|a| a.thermal_vibration == 0.12));
    }

    #[test]
    fn cell_override_replaces_computed_bounds() {
        let cell: CellOverride = "10,10,10".parse().unwrap();
        let out = to_computem(&standard_sample(), &PeriodicTable, 0.08, Some(&cell)).unwrap();
        assert_eq!(computem::writer::format_cell(&out.cell), "  10   10   10");
    }

    #[test]
    fn without_override_cell_line_shows_computed_bounds() {
        let out = to_computem(&standard_sample(), &PeriodicTable, 0.08, None).unwrap();
        assert_eq!(computem::writer::format_cell(&out.cell), "  5.0   3.2   1.1");
    }

    #[test]
    fn forward_fails_on_unknown_symbol() {
        let mut xyz = standard_sample();
        xyz.atoms[1].element = "Qq".to_string();
        let err = to_computem(&xyz, &PeriodicTable, 0.08, None).unwrap_err();
        assert_eq!(err, LookupError::UnknownSymbol("Qq".to_string()));
    }

    #[test]
    fn reverse_maps_numbers_and_counts_atoms() {
        let input = "title line\n  5 5 5\n14 0 0 0 1 0.08\n\n8 1 2 3 1 0.08\n-1\n1 9 9 9 1 0.08\n";
        let xyz = computem::reader::read(Cursor::new(input)).unwrap();
        let out = to_standard(&xyz, &PeriodicTable).unwrap();

        assert_eq!(out.count_line, "2");
        assert_eq!(out.comment, "title line");
        assert_eq!(
            out.atoms,
            vec![
                StandardAtom::new("Si", [0.0, 0.0, 0.0]),
                StandardAtom::new("O", [1.0, 2.0, 3.0]),
            ]
        );
    }

    #[test]
    fn reverse_fails_on_out_of_range_number() {
        let input = "t\nc\n0 0 0 0 1 0.08\n-1\n";
        let xyz = computem::reader::read(Cursor::new(input)).unwrap();
        let err = to_standard(&xyz, &PeriodicTable).unwrap_err();
        assert_eq!(err, LookupError::AtomicNumberOutOfRange(0));
    }

    #[test]
    fn reverse_fails_on_negative_number() {
        let input = "t\nc\n-5 0 0 0 1 0.08\n-1\n";
        let xyz = computem::reader::read(Cursor::new(input)).unwrap();
        let err = to_standard(&xyz, &PeriodicTable).unwrap_err();
        assert_eq!(err, LookupError::AtomicNumberOutOfRange(-5));
    }

    #[test]
    fn forward_then_reverse_preserves_atoms() {
        let original = "4\nmixed\nC -1.270 0.248 0.000\nO 1.036 0.789 0.0\n\nH -1.317 0.885 0.883\nFe 10 20 30\n";
        let std_xyz = standard::reader::read(Cursor::new(original)).unwrap();

        let forward = to_computem(&std_xyz, &PeriodicTable, 0.08, None).unwrap();
        let mut buf = Vec::new();
        computem::writer::write(&mut buf, &forward).unwrap();

        let reread = computem::reader::read(Cursor::new(buf)).unwrap();
        let back = to_standard(&reread, &PeriodicTable).unwrap();

        assert_eq!(back.atoms, std_xyz.atoms);
    }
}
