#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unsupported configuration file type: {0}")]
    UnsupportedFileType(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("benchmark configuration missing required field '{0}'")]
    MissingField(String),
    #[error("{count} comparables selected, at most {max} are supported")]
    TooManyComparables { count: usize, max: usize },
}
