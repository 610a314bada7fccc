use crate::io::{Format, error::Error, util};
use crate::model::{atom::ComputemAtom, cell::CellSize, structure::ComputemXyz};
use std::io::BufRead;

/// Reads a computem XYZ file.
///
/// The first two lines are a title and the cell line, both kept as text.
/// Atom lines carry six fields and end at a line reading `-1`; anything
/// after it is ignored. Blank lines are skipped.
pub fn read<R: BufRead>(reader: R) -> Result<ComputemXyz, Error> {
    let lines = util::read_numbered_lines(reader)?;
    let ([title, cell_line], body) = util::split_header(lines, Format::Computem)?;

    let mut atoms = Vec::with_capacity(body.len());
    for (ln, raw) in &body {
        let trimmed = raw.trim();
        if trimmed == util::END_OF_ATOMS {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        atoms.push(parse_atom(raw, *ln)?);
    }

    Ok(ComputemXyz {
        title,
        cell: CellSize::Raw(cell_line),
        atoms,
    })
}

fn parse_atom(line: &str, line_no: usize) -> Result<ComputemAtom, Error> {
    let [z_str, x, y, z, occ, vib] = util::tokens::<6>(line, line_no, Format::Computem)?;

    let atomic_number = z_str.parse::<i64>().map_err(|_| {
        Error::parse(
            Format::Computem,
            line_no,
            format!("invalid atomic number '{}'", z_str),
        )
    })?;
    let position = util::parse_position([x, y, z], line_no, Format::Computem)?;
    let occupancy = parse_number(occ, "occupancy", line_no)?;
    let thermal_vibration = parse_number(vib, "thermal vibration", line_no)?;

    Ok(ComputemAtom {
        atomic_number,
        position,
        occupancy,
        thermal_vibration,
    })
}

fn parse_number(field: &str, what: &str, line_no: usize) -> Result<f64, Error> {
    field.parse::<f64>().map_err(|_| {
        Error::parse(
            Format::Computem,
            line_no,
            format!("invalid {} '{}'", what, field),
        )
    })
}
