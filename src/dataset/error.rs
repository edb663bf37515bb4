use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Line {line}: expected {expected} columns, found {found}")]
    MissingColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column count must be at least 1")]
    InvalidColumns,

    #[error("No data rows found after the header")]
    Empty,
}
