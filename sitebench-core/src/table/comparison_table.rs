use super::SiteColumn;
use crate::model::FleetMetric;
use itertools::Itertools;
use serde::Serialize;

/// raw metric values of the potential site and its comparables.
///
/// `rows[i].values[j]` is the value of `rows[i].metric` for `columns[j]`.
/// missing values are NaN (serialized to JSON as `null`).
#[derive(Serialize, Clone, Debug, Default)]
pub struct ComparisonTable {
    pub columns: Vec<SiteColumn>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ComparisonRow {
    pub metric: FleetMetric,
    pub values: Vec<f64>,
}

/// one (metric, site, value) triple of a comparison table in long format
#[derive(Serialize, Clone, Debug)]
pub struct LongFormatRow {
    pub metric: FleetMetric,
    pub site: String,
    pub value: f64,
}

impl ComparisonTable {
    /// "Metric" followed by one label per site column
    pub fn column_labels(&self) -> Vec<String> {
        std::iter::once(String::from("Metric"))
            .chain(self.columns.iter().map(|c| c.label()))
            .collect_vec()
    }

    /// melts the table into one row per (metric, site) pair, metric-major, the
    /// shape consumed by grouped bar charts.
    pub fn long_format(&self) -> Vec<LongFormatRow> {
        self.rows
            .iter()
            .flat_map(|row| {
                self.columns
                    .iter()
                    .zip(row.values.iter())
                    .map(|(column, value)| LongFormatRow {
                        metric: row.metric,
                        site: column.label(),
                        value: *value,
                    })
            })
            .collect_vec()
    }

    pub fn value(&self, metric: &FleetMetric, site_name: &str) -> Option<f64> {
        let column = self.columns.iter().position(|c| c.site_name == site_name)?;
        let row = self.rows.iter().find(|r| r.metric == *metric)?;
        row.values.get(column).copied()
    }
}
