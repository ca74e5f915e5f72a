#[derive(thiserror::Error, Debug)]
pub enum BenchmarkError {
    #[error("potential site '{site_name}' not found among '{real_estate_type}' sites")]
    PotentialSiteNotFound {
        site_name: String,
        real_estate_type: String,
    },
    #[error("{count} comparables selected, at most {max} are supported")]
    TooManyComparables { count: usize, max: usize },
}
