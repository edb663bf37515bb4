mod format;
mod types;

#[cfg(test)]
mod tests;

pub use format::OutputFormat;
pub use types::{AssignedPoint, Report, ReportStats};
