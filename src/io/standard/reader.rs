use crate::io::{Format, error::Error, util};
use crate::model::{atom::StandardAtom, structure::StandardXyz};
use std::io::BufRead;

/// Reads a standard XYZ file: an atom count line, a comment line, then one
/// `symbol x y z` line per atom. Blank body lines are skipped.
pub fn read<R: BufRead>(reader: R) -> Result<StandardXyz, Error> {
    let lines = util::read_numbered_lines(reader)?;
    let ([count_line, comment], body) = util::split_header(lines, Format::Standard)?;

    let mut atoms = Vec::with_capacity(body.len());
    for (ln, raw) in &body {
        if raw.trim().is_empty() {
            continue;
        }
        atoms.push(parse_atom(raw, *ln)?);
    }

    Ok(StandardXyz {
        count_line,
        comment,
        atoms,
    })
}

fn parse_atom(line: &str, line_no: usize) -> Result<StandardAtom, Error> {
    let [symbol, x, y, z] = util::tokens::<4>(line, line_no, Format::Standard)?;
    let position = util::parse_position([x, y, z], line_no, Format::Standard)?;
    Ok(StandardAtom::new(symbol, position))
}
