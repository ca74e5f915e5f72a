#[derive(thiserror::Error, Debug)]
pub enum ReportWriteError {
    #[error("failure creating output directory '{directory}': {source}")]
    CreateDirectoryError {
        directory: String,
        source: std::io::Error,
    },
    #[error("failure opening output file '{filepath}': {source}")]
    FileOpenError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure writing CSV row {row} of '{filepath}': {source}")]
    CsvWriteError {
        filepath: String,
        row: usize,
        source: csv::Error,
    },
    #[error("failure writing '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure encoding benchmark snapshot as JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}
