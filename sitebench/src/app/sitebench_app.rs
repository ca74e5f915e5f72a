use super::{compare_ops, SitebenchAppError};
use crate::{
    config::{BenchmarkConfig, BenchmarkOverrides, OutputConfig},
    io::{fleet_reader, ReportFormat},
};
use clap::{Parser, Subcommand};
use sitebench_core::model::FleetMetric;
use std::{path::Path, str::FromStr};

/// benchmark a potential real estate site against up to three comparables and
/// rank it within its real estate type across the fleet
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SitebenchApp {
    #[command(subcommand)]
    pub app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(name = "types", about = "list the real estate types found in a fleet file")]
    Types {
        /// a CSV file with one row per site
        fleet_file: String,
    },
    #[command(name = "sites", about = "list the sites of one real estate type")]
    Sites {
        /// a CSV file with one row per site
        fleet_file: String,
        #[arg(long)]
        real_estate_type: String,
    },
    #[command(
        name = "compare",
        about = "compare a potential site with its comparables and rank it within its type"
    )]
    Compare {
        /// a CSV file with one row per site
        fleet_file: String,
        /// TOML or JSON file with benchmark settings. command line flags take precedence.
        #[arg(long)]
        config_file: Option<String>,
        #[arg(long)]
        real_estate_type: Option<String>,
        #[arg(long)]
        potential_site: Option<String>,
        /// comparable site, repeat up to three times. order is kept in the output.
        #[arg(long = "comparable")]
        comparables: Vec<String>,
        /// metric to include, repeat to select several. defaults to all five.
        #[arg(long = "metric", value_parser = FleetMetric::from_str)]
        metrics: Vec<FleetMetric>,
        /// directory to write report files into
        #[arg(long)]
        output_directory: Option<String>,
        /// report format, csv when neither this flag nor the configuration sets one
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
}

impl App {
    pub fn run(&self) -> Result<(), SitebenchAppError> {
        match self {
            App::Types { fleet_file } => {
                let dataset = fleet_reader::read_fleet(Path::new(fleet_file))?;
                for real_estate_type in dataset.real_estate_types() {
                    println!("{real_estate_type}");
                }
                Ok(())
            }
            App::Sites {
                fleet_file,
                real_estate_type,
            } => {
                let dataset = fleet_reader::read_fleet(Path::new(fleet_file))?;
                let sites = dataset.site_names(real_estate_type);
                if sites.is_empty() {
                    return Err(SitebenchAppError::UnknownRealEstateType(
                        real_estate_type.clone(),
                    ));
                }
                for site in sites {
                    println!("{site}");
                }
                Ok(())
            }
            App::Compare {
                fleet_file,
                config_file,
                real_estate_type,
                potential_site,
                comparables,
                metrics,
                output_directory,
                format,
            } => {
                let configured = BenchmarkConfig::load(config_file.as_deref())?;
                let configured_output = configured.output.clone();
                let output = match (output_directory, configured_output) {
                    (Some(directory), previous) => Some(OutputConfig {
                        directory: directory.clone(),
                        format: format
                            .or(previous.map(|o| o.format))
                            .unwrap_or_default(),
                    }),
                    (None, Some(previous)) => Some(OutputConfig {
                        directory: previous.directory,
                        format: format.unwrap_or(previous.format),
                    }),
                    (None, None) => None,
                };
                let overrides = BenchmarkOverrides {
                    real_estate_type: real_estate_type.clone(),
                    potential_site: potential_site.clone(),
                    comparables: comparables.clone(),
                    metrics: metrics.clone(),
                    output,
                };
                let config = configured.apply_overrides(overrides);
                log::debug!("benchmark configuration: {config:?}");
                compare_ops::run_compare(fleet_file, &config)?;
                Ok(())
            }
        }
    }
}
