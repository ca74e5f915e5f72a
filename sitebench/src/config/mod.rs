mod benchmark_config;
mod config_error;
mod output_config;

pub use benchmark_config::{BenchmarkConfig, BenchmarkOverrides, ENV_PREFIX};
pub use config_error::ConfigError;
pub use output_config::OutputConfig;
