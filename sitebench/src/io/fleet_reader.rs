use super::FleetReadError;
use csv::{Reader, StringRecord, Trim};
use kdam::tqdm;
use sitebench_core::model::{FleetDataset, FleetMetric, FleetRecord};
use std::{collections::HashMap, io::Read, path::Path};

pub const SITE_NAME_COLUMN: &str = "Site Name";
pub const REAL_ESTATE_TYPE_COLUMN: &str = "Real Estate Type";

/// reads a fleet file into a [`FleetDataset`].
///
/// header names are whitespace-trimmed before matching. the five metric columns
/// are coerced to numbers; empty or unparseable cells become NaN (missing).
pub fn read_fleet(path: &Path) -> Result<FleetDataset, FleetReadError> {
    let filepath = path.to_string_lossy().to_string();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if extension != "csv" {
        return Err(FleetReadError::UnsupportedFileType(filepath));
    }
    log::info!("reading fleet file {filepath}");
    let reader = csv::ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(|source| FleetReadError::FileOpenError {
            filepath: filepath.clone(),
            source,
        })?;
    read_fleet_csv(reader, &filepath)
}

/// reads fleet rows from an open CSV reader. `desc` labels the progress bar.
pub fn read_fleet_csv<R: Read>(
    mut reader: Reader<R>,
    desc: &str,
) -> Result<FleetDataset, FleetReadError> {
    let header_record = reader.headers().map_err(FleetReadError::HeaderError)?.clone();
    let header_lookup = header_lookup(&header_record);
    let site_name_idx = column_index(&header_lookup, SITE_NAME_COLUMN)?;
    let type_idx = column_index(&header_lookup, REAL_ESTATE_TYPE_COLUMN)?;
    let metric_idxs = FleetMetric::ALL
        .iter()
        .map(|m| column_index(&header_lookup, m.label()).map(|idx| (*m, idx)))
        .collect::<Result<Vec<_>, FleetReadError>>()?;

    let mut records = vec![];
    let mut n_coerced = 0;
    let row_iter = tqdm!(reader.records().enumerate(), desc = format!("reading {desc}"));
    for (row, result) in row_iter {
        let string_record = result.map_err(|source| FleetReadError::CsvError { row, source })?;
        let site_name = string_record.get(site_name_idx).unwrap_or_default();
        let real_estate_type = string_record.get(type_idx).unwrap_or_default();
        let mut record = FleetRecord::empty(site_name, real_estate_type);
        for (metric, idx) in metric_idxs.iter() {
            let cell = string_record.get(*idx).unwrap_or_default();
            let value = coerce_numeric(cell);
            if value.is_nan() && !cell.trim().is_empty() {
                log::debug!("row {row} {metric} value '{cell}' is not numeric, treating as missing");
                n_coerced += 1;
            }
            record.set(metric, value);
        }
        records.push(record);
    }
    eprintln!();

    if n_coerced > 0 {
        log::warn!("{n_coerced} non-numeric metric values in {desc} treated as missing");
    }
    let dataset = FleetDataset::new(records);
    if dataset.is_empty() {
        log::warn!("{desc} has a header but no fleet records");
    } else {
        log::info!("read {} fleet records from {desc}", dataset.len());
    }
    Ok(dataset)
}

/// parses a metric cell, returning NaN for empty or non-numeric text
pub fn coerce_numeric(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// maps column name to index. when a name repeats, the first column wins.
fn header_lookup(header_record: &StringRecord) -> HashMap<String, usize> {
    let mut lookup = HashMap::new();
    for (idx, name) in header_record.iter().enumerate() {
        lookup.entry(name.to_string()).or_insert(idx);
    }
    lookup
}

fn column_index(lookup: &HashMap<String, usize>, column: &str) -> Result<usize, FleetReadError> {
    lookup
        .get(column)
        .copied()
        .ok_or_else(|| FleetReadError::MissingColumn(column.to_string()))
}
