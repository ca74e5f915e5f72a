//! percentile ranking and comparison-table assembly for benchmarking a
//! potential real estate site against comparable sites of the same type.
//!
//! the fleet is passed around as an immutable [`model::FleetDataset`]. loading
//! and rendering live outside of this crate.
pub mod accessor;
mod benchmark;
mod benchmark_error;
pub mod model;
pub mod percentile;
pub mod table;

pub use benchmark::{Benchmark, BenchmarkRequest, MAX_COMPARABLES};
pub use benchmark_error::BenchmarkError;
