//! lookup of single fleet records by site name.
//!
//! absence is a normal outcome: callers treat `None` as "no site selected" and
//! omit that site from any table built downstream.
use crate::model::{FleetDataset, FleetRecord};

/// first record whose site name equals `site_name` exactly (case-sensitive).
pub fn find_record<'a>(dataset: &'a FleetDataset, site_name: &str) -> Option<&'a FleetRecord> {
    dataset.iter().find(|r| r.site_name == site_name)
}

/// first record of the given real estate type whose site name equals
/// `site_name` exactly. a site of another type is reported as absent.
pub fn find_record_in_cohort<'a>(
    dataset: &'a FleetDataset,
    real_estate_type: &str,
    site_name: &str,
) -> Option<&'a FleetRecord> {
    dataset
        .iter()
        .find(|r| r.real_estate_type == real_estate_type && r.site_name == site_name)
}
