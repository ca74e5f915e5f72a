mod fleet_dataset;
mod fleet_metric;
mod fleet_record;

pub use fleet_dataset::FleetDataset;
pub use fleet_metric::FleetMetric;
pub use fleet_record::FleetRecord;
