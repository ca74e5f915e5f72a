use super::{ComparisonRow, ComparisonTable, PercentileRow, PercentileTable, SiteColumn};
use crate::model::{FleetMetric, FleetRecord};
use crate::percentile::{to_display_percent, PercentileRanking};
use itertools::Itertools;

/// builds the value comparison table.
///
/// # Arguments
/// * `metrics` - metrics to tabulate, one row each, in this order
/// * `potential` - the potential site, always the first column
/// * `comparables` - comparable sites in selection order. absent (`None`) entries
///   are skipped entirely, so the table has one column per present comparable.
pub fn build_comparison_table(
    metrics: &[FleetMetric],
    potential: &FleetRecord,
    comparables: &[Option<&FleetRecord>],
) -> ComparisonTable {
    let present = comparables.iter().flatten().collect_vec();
    let columns = std::iter::once(SiteColumn::potential(&potential.site_name))
        .chain(
            present
                .iter()
                .enumerate()
                .map(|(idx, r)| SiteColumn::comparable(&r.site_name, idx + 1)),
        )
        .collect_vec();
    let rows = metrics
        .iter()
        .map(|metric| ComparisonRow {
            metric: *metric,
            values: std::iter::once(potential.get(metric))
                .chain(present.iter().map(|r| r.get(metric)))
                .collect_vec(),
        })
        .collect_vec();
    ComparisonTable { columns, rows }
}

/// builds the percentile table of the potential site, ranked within its own
/// real estate type.
pub fn build_percentile_table<R>(
    ranking: &R,
    metrics: &[FleetMetric],
    potential: &FleetRecord,
) -> PercentileTable
where
    R: PercentileRanking + ?Sized,
{
    let rows = metrics
        .iter()
        .map(|metric| {
            let fraction = ranking.percentile(
                metric,
                &potential.real_estate_type,
                potential.get(metric),
            );
            PercentileRow {
                metric: *metric,
                fraction,
                percent: to_display_percent(fraction),
            }
        })
        .collect_vec();
    PercentileTable {
        site_name: potential.site_name.clone(),
        real_estate_type: potential.real_estate_type.clone(),
        rows,
    }
}
