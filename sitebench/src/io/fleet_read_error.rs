#[derive(thiserror::Error, Debug)]
pub enum FleetReadError {
    #[error("unsupported fleet file type '{0}', expected a .csv file")]
    UnsupportedFileType(String),
    #[error("failed reading '{filepath}': {source}")]
    FileOpenError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed reading header row: {0}")]
    HeaderError(csv::Error),
    #[error("fleet file missing required column '{0}'")]
    MissingColumn(String),
    #[error("failed reading fleet row {row}: {source}")]
    CsvError { row: usize, source: csv::Error },
}
