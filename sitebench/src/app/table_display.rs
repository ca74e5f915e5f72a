use crate::io::report_writer::{format_percent, format_value, PERCENTILE_COLUMN};
use itertools::Itertools;
use sitebench_core::table::{ComparisonTable, PercentileTable};

/// renders the comparison table as aligned plain text, blank where values are
/// missing
pub fn comparison_to_string(table: &ComparisonTable) -> String {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.metric.label().to_string())
                .chain(row.values.iter().map(|v| format_value(*v)))
                .collect_vec()
        })
        .collect_vec();
    render(&table.column_labels(), &rows)
}

pub fn percentile_to_string(table: &PercentileTable) -> String {
    let header = vec![String::from("Metric"), String::from(PERCENTILE_COLUMN)];
    let rows = table
        .rows
        .iter()
        .map(|row| vec![row.metric.label().to_string(), format_percent(row.percent)])
        .collect_vec();
    render(&header, &rows)
}

/// first column left-aligned, the rest right-aligned, with a rule under the
/// header
fn render(header: &[String], rows: &[Vec<String>]) -> String {
    let widths = (0..header.len())
        .map(|col| {
            std::iter::once(header)
                .chain(rows.iter().map(|r| r.as_slice()))
                .filter_map(|r| r.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect_vec();
    let format_row = |row: &[String]| {
        row.iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .join("  ")
            .trim_end()
            .to_string()
    };
    let rule = widths.iter().map(|w| "-".repeat(*w)).join("  ");
    std::iter::once(format_row(header))
        .chain(std::iter::once(rule))
        .chain(rows.iter().map(|r| format_row(r.as_slice())))
        .join("\n")
}
