use super::FleetRecord;
use itertools::Itertools;

/// the currently loaded fleet, an ordered and immutable collection of records.
///
/// site names are not required to be unique; lookups return the first match in
/// dataset order. loading a new fleet file produces a new [`FleetDataset`].
#[derive(Clone, Debug, Default)]
pub struct FleetDataset {
    records: Vec<FleetRecord>,
}

impl FleetDataset {
    pub fn new(records: Vec<FleetRecord>) -> FleetDataset {
        FleetDataset { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FleetRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// records sharing the given real estate type, in dataset order
    pub fn cohort<'a>(
        &'a self,
        real_estate_type: &'a str,
    ) -> impl Iterator<Item = &'a FleetRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.real_estate_type == real_estate_type)
    }

    /// sorted, de-duplicated real estate types. blank types are skipped.
    pub fn real_estate_types(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.real_estate_type.as_str())
            .filter(|t| !t.is_empty())
            .unique()
            .sorted()
            .map(String::from)
            .collect_vec()
    }

    /// sorted, de-duplicated site names within one real estate type. blank names
    /// are skipped.
    pub fn site_names(&self, real_estate_type: &str) -> Vec<String> {
        self.cohort(real_estate_type)
            .map(|r| r.site_name.as_str())
            .filter(|n| !n.is_empty())
            .unique()
            .sorted()
            .map(String::from)
            .collect_vec()
    }
}
