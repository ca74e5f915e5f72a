mod comparison_table;
mod percentile_table;
mod site_column;
mod table_ops;

pub use comparison_table::{ComparisonRow, ComparisonTable, LongFormatRow};
pub use percentile_table::{PercentileRow, PercentileTable};
pub use site_column::{SiteColumn, SiteRole};
pub use table_ops::{build_comparison_table, build_percentile_table};
