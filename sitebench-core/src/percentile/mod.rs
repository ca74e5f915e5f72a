mod cohort_index;
mod percentile_ops;
mod percentile_ranking;

pub use cohort_index::CohortIndex;
pub use percentile_ops::{percentile, rank_in_sorted, to_display_percent};
pub use percentile_ranking::PercentileRanking;
