use super::reader::split_fields;
use super::*;
use std::io::Cursor;

fn read(text: &str, columns: usize) -> Result<crate::clusterer::PointList, DatasetError> {
    read_tsv(Cursor::new(text), columns)
}

#[test]
fn test_skips_header_row() {
    let data = read("x\ty\n1.0\t2.0\n3.5\t-4\n", 2).unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data[0].coords(), &[1.0, 2.0]);
    assert_eq!(data[1].coords(), &[3.5, -4.0]);
}

#[test]
fn test_keeps_only_leading_columns() {
    let data = read("a b c d\n1 2 3 4\n5 6 7 8\n", 2).unwrap();

    assert!(data.iter().all(|p| p.dim() == 2));
    assert_eq!(data[1].coords(), &[5.0, 6.0]);
}

#[test]
fn test_quoted_fields() {
    let data = read("\"first col\"\t\"second\"\n\"1.5\"\t\"2.5\"\n", 2).unwrap();
    assert_eq!(data[0].coords(), &[1.5, 2.5]);
}

#[test]
fn test_split_fields_quoted_whitespace() {
    let fields = split_fields("  \"a b\"\t c  \"d\\\"e\" ");
    assert_eq!(fields, vec!["a b", "c", "d\"e"]);
}

#[test]
fn test_blank_lines_are_skipped() {
    let data = read("h1 h2\n1 1\n\n   \n2 2\n", 2).unwrap();
    assert_eq!(data.len(), 2);
}

#[test]
fn test_header_only_is_empty() {
    assert!(matches!(read("x y\n", 2), Err(DatasetError::Empty)));
    assert!(matches!(read("x y\n\n  \n", 2), Err(DatasetError::Empty)));
    assert!(matches!(read("", 2), Err(DatasetError::Empty)));
}

#[test]
fn test_missing_columns() {
    let err = read("x y z\n1 2 3\n4 5\n", 3).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingColumns {
            line: 3,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn test_parse_error_location() {
    let err = read("x y\n1 abc\n", 2).unwrap_err();
    match err {
        DatasetError::Parse {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_non_finite_values() {
    assert!(read("x\nNaN\n", 1).is_err());
    assert!(read("x\ninf\n", 1).is_err());
}

#[test]
fn test_zero_columns_rejected() {
    assert!(matches!(read("x\n1\n", 0), Err(DatasetError::InvalidColumns)));
}

#[test]
fn test_load_missing_file() {
    let err = load_tsv("/nonexistent/lloyd/data.tsv", 2).unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}
