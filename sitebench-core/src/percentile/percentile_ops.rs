use crate::model::{FleetDataset, FleetMetric};
use itertools::Itertools;

/// fraction of same-type records whose `metric` value is strictly less than
/// `value`.
///
/// records missing the metric are dropped from the cohort before ranking. the
/// result is NaN when `value` is missing or the remaining cohort is empty, which
/// callers render as a blank cell.
///
/// ties with `value` do not count toward the numerator: a site equal to the
/// cohort minimum scores 0.0, and a site tied with others ranks below all of
/// them.
pub fn percentile(
    dataset: &FleetDataset,
    metric: &FleetMetric,
    real_estate_type: &str,
    value: f64,
) -> f64 {
    if value.is_nan() {
        return f64::NAN;
    }
    let sorted = sorted_cohort_values(dataset, metric, real_estate_type);
    rank_in_sorted(&sorted, value)
}

/// non-missing `metric` values of one cohort, sorted ascending.
fn sorted_cohort_values(
    dataset: &FleetDataset,
    metric: &FleetMetric,
    real_estate_type: &str,
) -> Vec<f64> {
    dataset
        .cohort(real_estate_type)
        .map(|r| r.get(metric))
        .filter(|v| !v.is_nan())
        .sorted_by(|a, b| a.total_cmp(b))
        .collect_vec()
}

/// left insertion point of `value` in `sorted` divided by its length.
///
/// `sorted` must be ascending and free of NaN values.
pub fn rank_in_sorted(sorted: &[f64], value: f64) -> f64 {
    if value.is_nan() || sorted.is_empty() {
        return f64::NAN;
    }
    let below = sorted.partition_point(|v| *v < value);
    below as f64 / sorted.len() as f64
}

/// converts a percentile fraction into a percentage rounded to one decimal
/// place, or `None` when the percentile is undefined.
///
/// the percentage is rounded as an exact decimal with ties going to the even
/// digit, so a rank of 1/16 (6.25%) displays as 6.2.
pub fn to_display_percent(fraction: f64) -> Option<f64> {
    if fraction.is_nan() {
        return None;
    }
    let percent = fraction * 100.0;
    let tenths = percent * 10.0;
    // rounding error of the product above, exact via fused multiply-add
    let residual = percent.mul_add(10.0, -tenths);
    let floor = tenths.floor();
    let rounded = if tenths - floor != 0.5 {
        tenths.round()
    } else if residual > 0.0 {
        floor + 1.0
    } else if residual < 0.0 {
        floor
    } else {
        tenths.round_ties_even()
    };
    Some(rounded / 10.0)
}

#[cfg(test)]
mod test {
    use super::{percentile, rank_in_sorted, to_display_percent};
    use crate::model::{FleetDataset, FleetMetric, FleetRecord};

    fn cohort(real_estate_type: &str, visits: &[f64]) -> Vec<FleetRecord> {
        visits
            .iter()
            .enumerate()
            .map(|(i, v)| {
                FleetRecord::empty(&format!("{real_estate_type} {i}"), real_estate_type)
                    .with(FleetMetric::Visits, *v)
            })
            .collect()
    }

    fn dataset(visits: &[f64]) -> FleetDataset {
        let mut records = cohort("Retail", visits);
        // a second cohort with much smaller values must never leak into Retail ranks
        records.extend(cohort("Office", &[1.0, 2.0, 3.0]));
        FleetDataset::new(records)
    }

    #[test]
    fn test_ties_are_excluded() {
        let ds = dataset(&[10.0, 20.0, 20.0, 30.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", 20.0);
        assert_eq!(result, 0.25);
    }

    #[test]
    fn test_cohort_minimum_is_zero() {
        let ds = dataset(&[5.0, 10.0, 15.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", 5.0);
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_above_maximum_is_one() {
        let ds = dataset(&[5.0, 10.0, 15.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", 16.0);
        assert_eq!(result, 1.0);
    }

    #[test]
    fn test_unsorted_input() {
        let ds = dataset(&[30.0, 10.0, 20.0, 20.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", 25.0);
        assert_eq!(result, 0.75);
    }

    #[test]
    fn test_monotonic_in_value() {
        let ds = dataset(&[3.0, 8.0, 8.0, 12.5, 40.0, 41.0, 99.0]);
        let probes = [-1.0, 0.0, 3.0, 5.0, 8.0, 8.1, 12.5, 41.0, 99.0, 100.0];
        let ranks = probes
            .iter()
            .map(|v| percentile(&ds, &FleetMetric::Visits, "Retail", *v))
            .collect::<Vec<_>>();
        for pair in ranks.windows(2) {
            assert!(pair[0] <= pair[1], "ranks must not decrease: {ranks:?}");
        }
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let ds = dataset(&[f64::NAN, 10.0, f64::NAN, 30.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", 20.0);
        assert_eq!(result, 0.5);
    }

    #[test]
    fn test_all_missing_is_undefined() {
        let ds = dataset(&[f64::NAN, f64::NAN]);
        for value in [0.0, 10.0, -5.0] {
            let result = percentile(&ds, &FleetMetric::Visits, "Retail", value);
            assert!(result.is_nan(), "expected NaN for {value}, found {result}");
        }
    }

    #[test]
    fn test_missing_reference_is_undefined() {
        let ds = dataset(&[5.0, 10.0, 15.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Retail", f64::NAN);
        assert!(result.is_nan());
    }

    #[test]
    fn test_empty_cohort_is_undefined() {
        let ds = dataset(&[5.0, 10.0, 15.0]);
        let result = percentile(&ds, &FleetMetric::Visits, "Industrial", 10.0);
        assert!(result.is_nan());
    }

    #[test]
    fn test_rank_in_sorted_empty() {
        assert!(rank_in_sorted(&[], 1.0).is_nan());
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(to_display_percent(1.0 / 3.0), Some(33.3));
        assert_eq!(to_display_percent(0.25), Some(25.0));
        assert_eq!(to_display_percent(2.0 / 3.0), Some(66.7));
        assert_eq!(to_display_percent(f64::NAN), None);
    }

    #[test]
    fn test_display_percent_halves_round_to_even() {
        assert_eq!(to_display_percent(1.0 / 16.0), Some(6.2));
        assert_eq!(to_display_percent(3.0 / 16.0), Some(18.8));
        assert_eq!(to_display_percent(5.0 / 16.0), Some(31.2));
        assert_eq!(to_display_percent(2.0 / 32.0), Some(6.2));
        assert_eq!(to_display_percent(0.0), Some(0.0));
        assert_eq!(to_display_percent(1.0), Some(100.0));
    }

    #[test]
    fn test_sixteen_site_cohort_display() {
        let visits = (0..16).map(|v| v as f64).collect::<Vec<_>>();
        let ds = dataset(&visits);
        let fraction = percentile(&ds, &FleetMetric::Visits, "Retail", 1.0);
        assert_eq!(fraction, 0.0625);
        assert_eq!(to_display_percent(fraction), Some(6.2));
    }
}
