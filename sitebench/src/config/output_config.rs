use crate::io::ReportFormat;
use serde::{Deserialize, Serialize};

/// where and how report files are written
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputConfig {
    pub directory: String,
    #[serde(default)]
    pub format: ReportFormat,
}
