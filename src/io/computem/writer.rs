use crate::io::{
    error::Error,
    util::{END_OF_ATOMS, FIELD_SEPARATOR, format_float},
};
use crate::model::{atom::ComputemAtom, cell::CellSize, structure::ComputemXyz};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, xyz: &ComputemXyz) -> Result<(), Error> {
    writeln!(writer, "{}", xyz.title)?;
    writeln!(writer, "{}", format_cell(&xyz.cell))?;
    for atom in &xyz.atoms {
        writeln!(writer, "{}", format_atom(atom))?;
    }
    writeln!(writer, "{END_OF_ATOMS}")?;
    Ok(())
}

/// Renders the cell line: two leading spaces, then three values separated
/// by three spaces. Raw cell lines are written unchanged.
pub fn format_cell(cell: &CellSize) -> String {
    let values = match cell {
        CellSize::Computed(bounds) => bounds.max.map(format_float),
        CellSize::Override(values) => values.values().clone(),
        CellSize::Raw(line) => return line.clone(),
    };
    format!("  {}", values.join(FIELD_SEPARATOR))
}

/// Renders `Z x y z occupancy vibration`. Occupancy is always `1`.
pub fn format_atom(atom: &ComputemAtom) -> String {
    let [x, y, z] = atom.position.map(format_float);
    [
        atom.atomic_number.to_string(),
        x,
        y,
        z,
        "1".to_string(),
        format_float(atom.thermal_vibration),
    ]
    .join(FIELD_SEPARATOR)
}
