use crate::{
    config::ConfigError,
    io::{FleetReadError, ReportWriteError},
};
use sitebench_core::BenchmarkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitebenchAppError {
    #[error("failure loading fleet: {source}")]
    FleetReadError {
        #[from]
        source: FleetReadError,
    },
    #[error("failure reading run configuration: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },
    #[error("failure building benchmark: {source}")]
    BenchmarkError {
        #[from]
        source: BenchmarkError,
    },
    #[error("failure writing report: {source}")]
    ReportWriteError {
        #[from]
        source: ReportWriteError,
    },
    #[error("real estate type '{0}' not found in fleet")]
    UnknownRealEstateType(String),
}
