use super::{Format, error::Error};
use std::io::BufRead;

/// Sentinel line terminating the atom block of a computem file.
pub const END_OF_ATOMS: &str = "-1";

/// Field separator of both output dialects.
pub const FIELD_SEPARATOR: &str = "   ";

/// Reads every line, keeping 1-based line numbers.
pub fn read_numbered_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        lines.push((i + 1, line?));
    }
    Ok(lines)
}

/// Splits off the two header lines.
pub fn split_header(
    lines: Vec<(usize, String)>,
    format: Format,
) -> Result<([String; 2], Vec<(usize, String)>), Error> {
    if lines.len() < 2 {
        return Err(Error::MissingHeader {
            format,
            found: lines.len(),
        });
    }

    let mut iter = lines.into_iter();
    let first = iter.next().map(|(_, l)| l).unwrap_or_default();
    let second = iter.next().map(|(_, l)| l).unwrap_or_default();
    Ok(([first, second], iter.collect()))
}

/// Splits a body line into exactly `N` whitespace-separated tokens.
pub fn tokens<const N: usize>(
    line: &str,
    line_no: usize,
    format: Format,
) -> Result<[&str; N], Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    <[&str; N]>::try_from(tokens.as_slice()).map_err(|_| {
        Error::parse(
            format,
            line_no,
            format!(
                "expected {} fields but found {} in '{}'",
                N,
                tokens.len(),
                line.trim()
            ),
        )
    })
}

pub fn parse_position(
    fields: [&str; 3],
    line_no: usize,
    format: Format,
) -> Result<[f64; 3], Error> {
    let mut position = [0.0; 3];
    for ((slot, field), axis) in position.iter_mut().zip(fields).zip(["x", "y", "z"]) {
        *slot = field.parse::<f64>().map_err(|_| {
            Error::parse(
                format,
                line_no,
                format!("invalid {} coordinate '{}'", axis, field),
            )
        })?;
    }
    Ok(position)
}

/// Formats a number as the shortest decimal that reads back to the same
/// value, always with a fractional part (`5` becomes `5.0`).
pub fn format_float(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn numbered_lines_are_one_based() {
        let lines = read_numbered_lines(Cursor::new("a\nb\r\n\nc")).unwrap();
        assert_eq!(
            lines,
            vec![
                (1, "a".to_string()),
                (2, "b".to_string()),
                (3, String::new()),
                (4, "c".to_string()),
            ]
        );
    }

    #[test]
    fn header_requires_two_lines() {
        let err = split_header(vec![(1, "3".to_string())], Format::Standard).unwrap_err();
        assert!(matches!(err, Error::MissingHeader { found: 1, .. }));
    }

    #[test]
    fn tokens_collapse_whitespace() {
        let [a, b, c, d] = tokens::<4>("  Si \t 1.0   2.0 3.0  ", 3, Format::Standard).unwrap();
        assert_eq!((a, b, c, d), ("Si", "1.0", "2.0", "3.0"));
    }

    #[test]
    fn tokens_report_wrong_count() {
        let err = tokens::<4>("Si 1.0 2.0", 7, Format::Standard).unwrap_err();
        match err {
            Error::Parse { line, details, .. } => {
                assert_eq!(line, 7);
                assert!(details.contains("expected 4 fields but found 3"));
                assert!(details.contains("Si 1.0 2.0"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn position_rejects_non_numeric() {
        let err = parse_position(["1.0", "y", "2.0"], 4, Format::Computem).unwrap_err();
        assert!(err.to_string().contains("invalid y coordinate 'y'"));
    }

    #[test]
    fn format_float_keeps_fraction() {
        assert_eq!(format_float(5.0), "5.0");
        assert_eq!(format_float(3.2), "3.2");
        assert_eq!(format_float(0.08), "0.08");
        assert_eq!(format_float(-1.25), "-1.25");
        assert_eq!(format_float(0.0), "0.0");
    }
}
