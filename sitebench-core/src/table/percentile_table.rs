use crate::model::FleetMetric;
use serde::Serialize;

/// within-type percentile ranks of the potential site, one row per metric.
#[derive(Serialize, Clone, Debug, Default)]
pub struct PercentileTable {
    pub site_name: String,
    pub real_estate_type: String,
    pub rows: Vec<PercentileRow>,
}

#[derive(Serialize, Clone, Debug)]
pub struct PercentileRow {
    pub metric: FleetMetric,
    /// rank in [0, 1], NaN if undefined
    pub fraction: f64,
    /// rank in [0, 100] rounded to one decimal place, None if undefined
    pub percent: Option<f64>,
}

impl PercentileTable {
    pub fn percent(&self, metric: &FleetMetric) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.metric == *metric)
            .and_then(|r| r.percent)
    }
}
