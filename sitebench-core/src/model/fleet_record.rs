use super::FleetMetric;
use serde::Serialize;

/// one site of the fleet.
///
/// metric values that were absent or unparseable in the source file are stored
/// as [`f64::NAN`] and must be treated as missing data, never as zero.
#[derive(Serialize, Clone, Debug)]
pub struct FleetRecord {
    pub site_name: String,
    pub real_estate_type: String,
    pub visits: f64,
    pub visitors: f64,
    pub daytime_population: f64,
    pub trade_area_population: f64,
    pub trade_area_size: f64,
}

impl FleetRecord {
    /// creates a record with every metric missing
    pub fn empty(site_name: &str, real_estate_type: &str) -> FleetRecord {
        FleetRecord {
            site_name: site_name.to_string(),
            real_estate_type: real_estate_type.to_string(),
            visits: f64::NAN,
            visitors: f64::NAN,
            daytime_population: f64::NAN,
            trade_area_population: f64::NAN,
            trade_area_size: f64::NAN,
        }
    }

    pub fn get(&self, metric: &FleetMetric) -> f64 {
        match metric {
            FleetMetric::Visits => self.visits,
            FleetMetric::Visitors => self.visitors,
            FleetMetric::DaytimePopulation => self.daytime_population,
            FleetMetric::TradeAreaPopulation => self.trade_area_population,
            FleetMetric::TradeAreaSize => self.trade_area_size,
        }
    }

    pub fn set(&mut self, metric: &FleetMetric, value: f64) {
        match metric {
            FleetMetric::Visits => self.visits = value,
            FleetMetric::Visitors => self.visitors = value,
            FleetMetric::DaytimePopulation => self.daytime_population = value,
            FleetMetric::TradeAreaPopulation => self.trade_area_population = value,
            FleetMetric::TradeAreaSize => self.trade_area_size = value,
        }
    }

    /// builder-style variant of [`FleetRecord::set`]
    pub fn with(mut self, metric: FleetMetric, value: f64) -> FleetRecord {
        self.set(&metric, value);
        self
    }

    pub fn is_missing(&self, metric: &FleetMetric) -> bool {
        self.get(metric).is_nan()
    }
}
