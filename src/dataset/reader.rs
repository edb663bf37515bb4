use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::clusterer::{Point, PointList};
use crate::dataset::error::DatasetError;

/// Read whitespace-separated rows into points of `columns` dimensions.
///
/// The first line is a header and is skipped. Only the leading `columns`
/// values of each row are kept; blank rows are ignored. A file with no
/// data rows is an error.
pub fn read_tsv<R: BufRead>(reader: R, columns: usize) -> Result<PointList, DatasetError> {
    if columns == 0 {
        return Err(DatasetError::InvalidColumns);
    }

    let mut points = PointList::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line_no == 1 || line.trim().is_empty() {
            continue;
        }

        let tokens = split_fields(&line);
        if tokens.len() < columns {
            return Err(DatasetError::MissingColumns {
                line: line_no,
                expected: columns,
                found: tokens.len(),
            });
        }

        let mut coords = Vec::with_capacity(columns);
        for (col, token) in tokens.iter().take(columns).enumerate() {
            let value = token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DatasetError::Parse {
                    line: line_no,
                    column: col + 1,
                    value: token.clone(),
                })?;
            coords.push(value);
        }

        points.push(Point::new(coords));
    }

    if points.is_empty() {
        return Err(DatasetError::Empty);
    }

    log::debug!("read {} points with {} columns", points.len(), columns);
    Ok(points)
}

/// Open `path` and read it with [`read_tsv`]
pub fn load_tsv<P: AsRef<Path>>(path: P, columns: usize) -> Result<PointList, DatasetError> {
    let file = File::open(path)?;
    read_tsv(BufReader::new(file), columns)
}

/// Split a row on whitespace, treating a double-quoted run as one field.
/// Backslash escapes the next character inside quotes.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let Some(&first) = chars.peek() else {
            break;
        };

        let mut field = String::new();
        if first == '"' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            field.push(escaped);
                        }
                    }
                    '"' => break,
                    _ => field.push(c),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                field.push(c);
                chars.next();
            }
        }

        fields.push(field);
    }

    fields
}
