use crate::{
    accessor,
    model::{FleetDataset, FleetMetric},
    percentile::PercentileRanking,
    table::{self, ComparisonTable, PercentileTable},
    BenchmarkError,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// most comparable sites a single benchmark may show next to the potential site
pub const MAX_COMPARABLES: usize = 3;

/// the analyst's selection for one benchmark.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BenchmarkRequest {
    pub real_estate_type: String,
    pub potential_site: String,
    /// comparable site names, in selection order
    #[serde(default)]
    pub comparables: Vec<String>,
    /// metrics to tabulate, in display order
    #[serde(default = "default_metrics")]
    pub metrics: Vec<FleetMetric>,
}

fn default_metrics() -> Vec<FleetMetric> {
    FleetMetric::ALL.to_vec()
}

/// comparison and percentile tables for one [`BenchmarkRequest`].
#[derive(Serialize, Clone, Debug)]
pub struct Benchmark {
    pub request: BenchmarkRequest,
    pub comparison: ComparisonTable,
    pub percentiles: PercentileTable,
    /// requested comparables that were not found within the requested type
    pub absent_comparables: Vec<String>,
}

impl Benchmark {
    /// looks up the selected sites within the requested real estate type and
    /// assembles both tables.
    ///
    /// # Arguments
    /// * `dataset` - the loaded fleet
    /// * `ranking` - percentile source for `dataset`, either the dataset itself or
    ///   a [`crate::percentile::CohortIndex`] built from it
    /// * `request` - the selection to benchmark
    ///
    /// # Result
    ///
    /// the benchmark, or an error if the potential site does not exist in the
    /// requested type or too many comparables were requested. comparables that
    /// cannot be found are omitted from both tables and listed in
    /// `absent_comparables`.
    pub fn build<R>(
        dataset: &FleetDataset,
        ranking: &R,
        request: BenchmarkRequest,
    ) -> Result<Benchmark, BenchmarkError>
    where
        R: PercentileRanking + ?Sized,
    {
        if request.comparables.len() > MAX_COMPARABLES {
            return Err(BenchmarkError::TooManyComparables {
                count: request.comparables.len(),
                max: MAX_COMPARABLES,
            });
        }
        let potential = accessor::find_record_in_cohort(
            dataset,
            &request.real_estate_type,
            &request.potential_site,
        )
        .ok_or_else(|| BenchmarkError::PotentialSiteNotFound {
            site_name: request.potential_site.clone(),
            real_estate_type: request.real_estate_type.clone(),
        })?;

        let comparables = request
            .comparables
            .iter()
            .map(|name| {
                accessor::find_record_in_cohort(dataset, &request.real_estate_type, name)
            })
            .collect_vec();
        let absent_comparables = request
            .comparables
            .iter()
            .zip(comparables.iter())
            .filter(|(_, found)| found.is_none())
            .map(|(name, _)| name.clone())
            .collect_vec();
        for name in absent_comparables.iter() {
            log::warn!(
                "comparable '{name}' not found among '{}' sites, omitting it",
                request.real_estate_type
            );
        }

        let comparison = table::build_comparison_table(&request.metrics, potential, &comparables);
        let percentiles = table::build_percentile_table(ranking, &request.metrics, potential);
        log::debug!(
            "built benchmark for '{}' with {} comparables and {} metrics",
            potential.site_name,
            comparison.columns.len() - 1,
            request.metrics.len()
        );

        Ok(Benchmark {
            request,
            comparison,
            percentiles,
            absent_comparables,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Benchmark, BenchmarkRequest};
    use crate::model::{FleetDataset, FleetMetric, FleetRecord};
    use crate::percentile::CohortIndex;
    use crate::BenchmarkError;

    fn dataset() -> FleetDataset {
        let rows: [(&str, &str, f64); 6] = [
            ("Potential", "Retail", 20.0),
            ("A", "Retail", 10.0),
            ("B", "Retail", 20.0),
            ("C", "Retail", 30.0),
            ("Tower", "Office", 5.0),
            ("Potential", "Office", 99.0),
        ];
        let records = rows
            .iter()
            .map(|(name, rtype, visits)| {
                FleetRecord::empty(name, rtype).with(FleetMetric::Visits, *visits)
            })
            .collect();
        FleetDataset::new(records)
    }

    fn request(comparables: &[&str]) -> BenchmarkRequest {
        BenchmarkRequest {
            real_estate_type: String::from("Retail"),
            potential_site: String::from("Potential"),
            comparables: comparables.iter().map(|s| s.to_string()).collect(),
            metrics: vec![FleetMetric::Visits],
        }
    }

    #[test]
    fn test_build_with_absent_comparable() {
        let ds = dataset();
        let index = CohortIndex::new(&ds);
        let result = Benchmark::build(&ds, &index, request(&["B", "Nonexistent Site", "A"]))
            .expect("benchmark should build");
        let names = result
            .comparison
            .columns
            .iter()
            .map(|c| c.site_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Potential", "B", "A"]);
        assert_eq!(result.absent_comparables, vec![String::from("Nonexistent Site")]);
        assert_eq!(result.percentiles.percent(&FleetMetric::Visits), Some(25.0));
        assert_eq!(result.percentiles.rows.len(), 1);
    }

    #[test]
    fn test_comparable_of_other_type_is_absent() {
        let ds = dataset();
        let result =
            Benchmark::build(&ds, &ds, request(&["Tower"])).expect("benchmark should build");
        assert_eq!(result.comparison.columns.len(), 1);
        assert_eq!(result.absent_comparables, vec![String::from("Tower")]);
    }

    #[test]
    fn test_potential_looked_up_within_type() {
        let ds = dataset();
        let result = Benchmark::build(&ds, &ds, request(&[])).expect("benchmark should build");
        assert_eq!(
            result.comparison.value(&FleetMetric::Visits, "Potential"),
            Some(20.0)
        );
    }

    #[test]
    fn test_missing_potential() {
        let ds = dataset();
        let mut req = request(&[]);
        req.potential_site = String::from("Nowhere");
        let result = Benchmark::build(&ds, &ds, req);
        assert!(matches!(
            result,
            Err(BenchmarkError::PotentialSiteNotFound { .. })
        ));
    }

    #[test]
    fn test_too_many_comparables() {
        let ds = dataset();
        let result = Benchmark::build(&ds, &ds, request(&["A", "B", "C", "Tower"]));
        assert!(matches!(
            result,
            Err(BenchmarkError::TooManyComparables { count: 4, max: 3 })
        ));
    }

    #[test]
    fn test_request_default_metrics() {
        let req: BenchmarkRequest = serde_json::from_str(
            r#"{"real_estate_type": "Retail", "potential_site": "Potential"}"#,
        )
        .expect("request should decode");
        assert_eq!(req.metrics, FleetMetric::ALL.to_vec());
        assert!(req.comparables.is_empty());
    }
}
