use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated centroids followed by per-point assignments
    #[default]
    Text,
    /// Pretty-printed JSON document with run metadata
    Json,
}
