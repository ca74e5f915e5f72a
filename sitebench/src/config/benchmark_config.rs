use super::{ConfigError, OutputConfig};
use config::{Config, Environment, FileFormat};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sitebench_core::{model::FleetMetric, BenchmarkRequest, MAX_COMPARABLES};
use std::path::Path;

pub const ENV_PREFIX: &str = "SITEBENCH";

/// selection and output settings for a `compare` run.
///
/// values are layered: configuration file, then `SITEBENCH_*` environment
/// variables, then command line flags (see [`BenchmarkConfig::apply_overrides`]).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BenchmarkConfig {
    pub real_estate_type: Option<String>,
    pub potential_site: Option<String>,
    #[serde(default)]
    pub comparables: Vec<String>,
    /// metrics in display order. empty selects all five.
    #[serde(default)]
    pub metrics: Vec<FleetMetric>,
    pub output: Option<OutputConfig>,
}

/// command line values that replace configured ones when present
#[derive(Clone, Debug, Default)]
pub struct BenchmarkOverrides {
    pub real_estate_type: Option<String>,
    pub potential_site: Option<String>,
    pub comparables: Vec<String>,
    pub metrics: Vec<FleetMetric>,
    pub output: Option<OutputConfig>,
}

impl BenchmarkConfig {
    /// loads a configuration from an optional TOML or JSON file plus the
    /// environment. with no file, only the environment is read.
    pub fn load(config_file: Option<&str>) -> Result<BenchmarkConfig, ConfigError> {
        BenchmarkConfig::load_with_environment(config_file, environment())
    }

    /// loads a configuration layering `env` over the optional file.
    fn load_with_environment(
        config_file: Option<&str>,
        env: Environment,
    ) -> Result<BenchmarkConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(f) = config_file {
            log::info!("reading benchmark configuration from {f}");
            let format = file_format(f)?;
            builder = builder.add_source(config::File::new(f, format).required(true));
        }
        let config = builder
            .add_source(env)
            .build()
            .map_err(|source| ConfigError::ConfigReadError {
                msg: String::from("failed reading benchmark configuration"),
                source,
            })?;
        config
            .try_deserialize::<BenchmarkConfig>()
            .map_err(|source| ConfigError::ConfigReadError {
                msg: String::from("failed decoding benchmark configuration"),
                source,
            })
    }

    pub fn apply_overrides(mut self, overrides: BenchmarkOverrides) -> BenchmarkConfig {
        if overrides.real_estate_type.is_some() {
            self.real_estate_type = overrides.real_estate_type;
        }
        if overrides.potential_site.is_some() {
            self.potential_site = overrides.potential_site;
        }
        if !overrides.comparables.is_empty() {
            self.comparables = overrides.comparables;
        }
        if !overrides.metrics.is_empty() {
            self.metrics = overrides.metrics;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        self
    }

    /// validates the selection and converts it into a [`BenchmarkRequest`].
    ///
    /// the potential site is removed from the comparables and repeated names are
    /// collapsed to their first occurrence, keeping selection order. more than
    /// [`MAX_COMPARABLES`] remaining comparables is an error.
    pub fn to_request(&self) -> Result<BenchmarkRequest, ConfigError> {
        let real_estate_type = self
            .real_estate_type
            .clone()
            .ok_or_else(|| ConfigError::MissingField(String::from("real_estate_type")))?;
        let potential_site = self
            .potential_site
            .clone()
            .ok_or_else(|| ConfigError::MissingField(String::from("potential_site")))?;

        if self.comparables.contains(&potential_site) {
            log::warn!("potential site '{potential_site}' cannot be its own comparable, ignoring it");
        }
        let comparables = self
            .comparables
            .iter()
            .filter(|c| **c != potential_site)
            .unique()
            .cloned()
            .collect_vec();
        if comparables.len() > MAX_COMPARABLES {
            return Err(ConfigError::TooManyComparables {
                count: comparables.len(),
                max: MAX_COMPARABLES,
            });
        }

        let metrics = if self.metrics.is_empty() {
            FleetMetric::ALL.to_vec()
        } else {
            self.metrics.iter().unique().copied().collect_vec()
        };

        Ok(BenchmarkRequest {
            real_estate_type,
            potential_site,
            comparables,
            metrics,
        })
    }
}

/// `SITEBENCH_*` variables. nested keys use `__` (`SITEBENCH_OUTPUT__DIRECTORY`)
/// and list keys are comma-separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("comparables")
        .with_list_parse_key("metrics")
}

fn file_format(f: &str) -> Result<FileFormat, ConfigError> {
    let extension = Path::new(f)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(ConfigError::UnsupportedFileType(f.to_string())),
    }
}
