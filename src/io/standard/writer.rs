use crate::io::{
    error::Error,
    util::{FIELD_SEPARATOR, format_float},
};
use crate::model::{atom::StandardAtom, structure::StandardXyz};
use std::io::Write;

/// Writes a standard XYZ file. The count line is always the number of
/// atoms actually written, whatever the record set's `count_line` says.
pub fn write<W: Write>(mut writer: W, xyz: &StandardXyz) -> Result<(), Error> {
    writeln!(writer, "{}", xyz.atom_count())?;
    writeln!(writer, "{}", xyz.comment)?;
    for atom in &xyz.atoms {
        writeln!(writer, "{}", format_atom(atom))?;
    }
    Ok(())
}

pub fn format_atom(atom: &StandardAtom) -> String {
    let [x, y, z] = atom.position.map(format_float);
    [atom.element.clone(), x, y, z].join(FIELD_SEPARATOR)
}
