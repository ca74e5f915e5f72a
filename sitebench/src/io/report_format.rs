use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// file format used when exporting a benchmark for downstream rendering
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// one CSV file per table
    #[default]
    Csv,
    /// a single JSON snapshot with both tables and long-format chart rows
    Json,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
