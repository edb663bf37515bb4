mod error;
mod reader;

#[cfg(test)]
mod tests;

pub use error::DatasetError;
pub use reader::{load_tsv, read_tsv};
