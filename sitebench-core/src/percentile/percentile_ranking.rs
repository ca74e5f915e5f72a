use super::percentile_ops;
use crate::model::{FleetDataset, FleetMetric};

/// a source of within-type percentile ranks.
///
/// implemented directly on [`FleetDataset`] (sorts the cohort per call) and on
/// [`super::CohortIndex`] (sorts once per dataset). both must agree exactly.
pub trait PercentileRanking {
    fn percentile(&self, metric: &FleetMetric, real_estate_type: &str, value: f64) -> f64;
}

impl PercentileRanking for FleetDataset {
    fn percentile(&self, metric: &FleetMetric, real_estate_type: &str, value: f64) -> f64 {
        percentile_ops::percentile(self, metric, real_estate_type, value)
    }
}
