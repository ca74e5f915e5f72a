use super::{table_display, SitebenchAppError};
use crate::{config::BenchmarkConfig, io::fleet_reader, io::report_writer};
use sitebench_core::{model::FleetDataset, percentile::CohortIndex, Benchmark};
use std::path::Path;

/// loads a fleet, benchmarks the configured selection against it, prints both
/// tables to stdout and writes report files when an output is configured.
pub fn run_compare(
    fleet_file: &str,
    config: &BenchmarkConfig,
) -> Result<Benchmark, SitebenchAppError> {
    let dataset = fleet_reader::read_fleet(Path::new(fleet_file))?;
    let benchmark = compare(&dataset, config)?;

    println!("Metric comparison: potential vs comparables");
    println!("{}", table_display::comparison_to_string(&benchmark.comparison));
    println!();
    println!(
        "Fleet percentile of {} within '{}'",
        benchmark.percentiles.site_name, benchmark.percentiles.real_estate_type
    );
    println!("{}", table_display::percentile_to_string(&benchmark.percentiles));

    if let Some(output) = &config.output {
        let written =
            report_writer::write_report(&benchmark, Path::new(&output.directory), output.format)?;
        for path in written.iter() {
            log::info!("wrote {}", path.to_string_lossy());
        }
    }
    Ok(benchmark)
}

/// benchmarks the configured selection against an already loaded fleet
pub fn compare(
    dataset: &FleetDataset,
    config: &BenchmarkConfig,
) -> Result<Benchmark, SitebenchAppError> {
    let request = config.to_request()?;
    if dataset.cohort(&request.real_estate_type).next().is_none() {
        return Err(SitebenchAppError::UnknownRealEstateType(
            request.real_estate_type,
        ));
    }
    let index = CohortIndex::new(dataset);
    let benchmark = Benchmark::build(dataset, &index, request)?;
    Ok(benchmark)
}
