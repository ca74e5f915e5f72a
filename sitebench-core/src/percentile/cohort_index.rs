use super::{percentile_ops, PercentileRanking};
use crate::model::{FleetDataset, FleetMetric};
use std::collections::HashMap;

/// sorted metric values for every (real estate type, metric) pair of a fleet.
///
/// built once when a fleet is loaded and reused for every percentile query
/// against that fleet. rebuild it whenever a new fleet is loaded.
#[derive(Clone, Debug, Default)]
pub struct CohortIndex {
    sorted_values: HashMap<(String, FleetMetric), Vec<f64>>,
}

impl CohortIndex {
    pub fn new(dataset: &FleetDataset) -> CohortIndex {
        let mut sorted_values: HashMap<(String, FleetMetric), Vec<f64>> = HashMap::new();
        for record in dataset.iter() {
            for metric in FleetMetric::ALL {
                let value = record.get(&metric);
                if value.is_nan() {
                    continue;
                }
                sorted_values
                    .entry((record.real_estate_type.clone(), metric))
                    .or_default()
                    .push(value);
            }
        }
        for values in sorted_values.values_mut() {
            values.sort_by(|a, b| a.total_cmp(b));
        }
        log::debug!(
            "built cohort index with {} (type, metric) entries from {} records",
            sorted_values.len(),
            dataset.len()
        );
        CohortIndex { sorted_values }
    }

    /// the sorted, non-missing values of one cohort. empty if the cohort has no
    /// values for this metric.
    pub fn sorted_values(&self, metric: &FleetMetric, real_estate_type: &str) -> &[f64] {
        self.sorted_values
            .get(&(real_estate_type.to_string(), *metric))
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }
}

impl PercentileRanking for CohortIndex {
    fn percentile(&self, metric: &FleetMetric, real_estate_type: &str, value: f64) -> f64 {
        percentile_ops::rank_in_sorted(self.sorted_values(metric, real_estate_type), value)
    }
}

#[cfg(test)]
mod test {
    use super::CohortIndex;
    use crate::model::{FleetDataset, FleetMetric, FleetRecord};
    use crate::percentile::{percentile, PercentileRanking};

    fn dataset() -> FleetDataset {
        let rows: [(&str, &str, f64, f64); 8] = [
            ("A", "Retail", 10.0, 1.5),
            ("B", "Retail", 20.0, f64::NAN),
            ("C", "Retail", 20.0, 0.5),
            ("D", "Retail", 30.0, 2.5),
            ("E", "Office", 7.0, f64::NAN),
            ("F", "Office", f64::NAN, f64::NAN),
            ("G", "Office", 3.0, f64::NAN),
            ("H", "Retail", f64::NAN, 1.5),
        ];
        let records = rows
            .iter()
            .map(|(name, rtype, visits, size)| {
                FleetRecord::empty(name, rtype)
                    .with(FleetMetric::Visits, *visits)
                    .with(FleetMetric::TradeAreaSize, *size)
            })
            .collect();
        FleetDataset::new(records)
    }

    #[test]
    fn test_index_agrees_with_direct_computation() {
        let ds = dataset();
        let index = CohortIndex::new(&ds);
        let probes = [f64::NAN, -1.0, 0.5, 1.5, 3.0, 7.0, 10.0, 20.0, 25.0, 30.0, 31.0];
        for rtype in ["Retail", "Office", "Industrial"] {
            for metric in FleetMetric::ALL {
                for value in probes {
                    let direct = percentile(&ds, &metric, rtype, value);
                    let indexed = index.percentile(&metric, rtype, value);
                    let agree = (direct.is_nan() && indexed.is_nan()) || direct == indexed;
                    assert!(
                        agree,
                        "{rtype}/{metric}/{value}: direct {direct} != indexed {indexed}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sorted_values_drop_missing() {
        let ds = dataset();
        let index = CohortIndex::new(&ds);
        assert_eq!(
            index.sorted_values(&FleetMetric::TradeAreaSize, "Retail"),
            &[0.5, 1.5, 1.5, 2.5]
        );
        assert!(index
            .sorted_values(&FleetMetric::TradeAreaSize, "Office")
            .is_empty());
    }
}
