//! writes benchmark tables to disk for the rendering collaborator. charts and
//! page layout are produced elsewhere from these files.
use super::{ReportFormat, ReportWriteError};
use itertools::Itertools;
use serde::Serialize;
use sitebench_core::{
    table::{ComparisonTable, LongFormatRow, PercentileTable},
    Benchmark,
};
use std::path::{Path, PathBuf};

pub const COMPARISON_FILENAME: &str = "benchmark_comparison.csv";
pub const PERCENTILE_FILENAME: &str = "benchmark_percentile.csv";
pub const SNAPSHOT_FILENAME: &str = "benchmark_snapshot.json";
pub const PERCENTILE_COLUMN: &str = "Percentile %";

/// everything a renderer needs to draw both charts and tables of a benchmark
#[derive(Serialize)]
struct BenchmarkSnapshot<'a> {
    generated_at: String,
    benchmark: &'a Benchmark,
    long_format: Vec<LongFormatRow>,
}

/// writes the benchmark into `directory`, creating it if needed.
///
/// # Result
///
/// the paths of all files written
pub fn write_report(
    benchmark: &Benchmark,
    directory: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportWriteError> {
    std::fs::create_dir_all(directory).map_err(|source| {
        ReportWriteError::CreateDirectoryError {
            directory: directory.to_string_lossy().to_string(),
            source,
        }
    })?;
    match format {
        ReportFormat::Csv => {
            let comparison_path = directory.join(COMPARISON_FILENAME);
            write_comparison_csv(&benchmark.comparison, &comparison_path)?;
            let percentile_path = directory.join(PERCENTILE_FILENAME);
            write_percentile_csv(&benchmark.percentiles, &percentile_path)?;
            Ok(vec![comparison_path, percentile_path])
        }
        ReportFormat::Json => {
            let snapshot_path = directory.join(SNAPSHOT_FILENAME);
            write_snapshot_json(benchmark, &snapshot_path)?;
            Ok(vec![snapshot_path])
        }
    }
}

/// comparison table as CSV, one row per metric. missing values are blank.
pub fn write_comparison_csv(table: &ComparisonTable, path: &Path) -> Result<(), ReportWriteError> {
    let rows = table.rows.iter().map(|row| {
        std::iter::once(row.metric.label().to_string())
            .chain(row.values.iter().map(|v| format_value(*v)))
            .collect_vec()
    });
    write_csv(path, table.column_labels(), rows)
}

/// percentile table as CSV with "Metric" and "Percentile %" columns.
/// undefined percentiles are blank.
pub fn write_percentile_csv(table: &PercentileTable, path: &Path) -> Result<(), ReportWriteError> {
    let header = vec![String::from("Metric"), String::from(PERCENTILE_COLUMN)];
    let rows = table.rows.iter().map(|row| {
        vec![
            row.metric.label().to_string(),
            format_percent(row.percent),
        ]
    });
    write_csv(path, header, rows)
}

pub fn write_snapshot_json(benchmark: &Benchmark, path: &Path) -> Result<(), ReportWriteError> {
    let snapshot = BenchmarkSnapshot {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        benchmark,
        long_format: benchmark.comparison.long_format(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json).map_err(|source| ReportWriteError::IoError {
        filepath: path.to_string_lossy().to_string(),
        source,
    })
}

/// a metric value as table text, blank when missing
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value}")
    }
}

/// a display percentage as table text, blank when undefined
pub fn format_percent(percent: Option<f64>) -> String {
    percent.map(|p| format!("{p:.1}")).unwrap_or_default()
}

fn write_csv(
    path: &Path,
    header: Vec<String>,
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<(), ReportWriteError> {
    let filepath = path.to_string_lossy().to_string();
    let mut writer =
        csv::Writer::from_path(path).map_err(|source| ReportWriteError::FileOpenError {
            filepath: filepath.clone(),
            source,
        })?;
    for (row, record) in std::iter::once(header).chain(rows).enumerate() {
        writer
            .write_record(&record)
            .map_err(|source| ReportWriteError::CsvWriteError {
                filepath: filepath.clone(),
                row,
                source,
            })?;
    }
    writer.flush().map_err(|source| ReportWriteError::IoError {
        filepath: filepath.clone(),
        source,
    })?;
    log::debug!("wrote {filepath}");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{format_percent, format_value, write_report};
    use crate::io::ReportFormat;
    use sitebench_core::model::{FleetDataset, FleetMetric, FleetRecord};
    use sitebench_core::{Benchmark, BenchmarkRequest};
    use std::path::PathBuf;

    fn benchmark() -> Benchmark {
        let dataset = FleetDataset::new(vec![
            FleetRecord::empty("Potential", "Retail")
                .with(FleetMetric::Visits, 200.0)
                .with(FleetMetric::TradeAreaSize, 2.5),
            FleetRecord::empty("Comp, Inc", "Retail").with(FleetMetric::Visits, 100.0),
            FleetRecord::empty("Other", "Retail").with(FleetMetric::Visits, 300.0),
        ]);
        let request = BenchmarkRequest {
            real_estate_type: String::from("Retail"),
            potential_site: String::from("Potential"),
            comparables: vec![String::from("Comp, Inc")],
            metrics: vec![FleetMetric::Visits, FleetMetric::Visitors],
        };
        Benchmark::build(&dataset, &dataset, request).expect("benchmark should build")
    }

    fn output_directory(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sitebench-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_csv_report() {
        let dir = output_directory("csv-report");
        let written =
            write_report(&benchmark(), &dir, ReportFormat::Csv).expect("report should write");
        assert_eq!(written.len(), 2);

        let comparison =
            std::fs::read_to_string(&written[0]).expect("comparison file should exist");
        let lines = comparison.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Metric,Potential (Potential),\"Comp, Inc (Comp 1)\"",
                "Visits,200,100",
                "Visitors,,",
            ]
        );

        let percentile =
            std::fs::read_to_string(&written[1]).expect("percentile file should exist");
        let lines = percentile.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec!["Metric,Percentile %", "Visits,33.3", "Visitors,"]
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_json_report() {
        let dir = output_directory("json-report");
        let written =
            write_report(&benchmark(), &dir, ReportFormat::Json).expect("report should write");
        let text = std::fs::read_to_string(&written[0]).expect("snapshot should exist");
        let json: serde_json::Value = serde_json::from_str(&text).expect("snapshot is JSON");

        assert!(json.get("generated_at").and_then(|v| v.as_str()).is_some());
        let long = json
            .get("long_format")
            .and_then(|v| v.as_array())
            .expect("long_format should be an array");
        assert_eq!(long.len(), 4);
        // missing values are encoded as null
        assert!(long[2]["value"].is_null());
        assert_eq!(long[0]["metric"], "visits");
        assert_eq!(
            json["benchmark"]["percentiles"]["rows"][0]["percent"].as_f64(),
            Some(33.3)
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_blank_cells() {
        assert_eq!(format_value(f64::NAN), "");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(120000.0), "120000");
        assert_eq!(format_percent(None), "");
        assert_eq!(format_percent(Some(50.0)), "50.0");
    }
}
