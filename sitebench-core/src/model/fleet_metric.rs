use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the five traffic and trade-area metrics carried by every fleet record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FleetMetric {
    Visits,
    Visitors,
    DaytimePopulation,
    TradeAreaPopulation,
    TradeAreaSize,
}

impl FleetMetric {
    /// canonical ordering, also the default metric selection.
    pub const ALL: [FleetMetric; 5] = [
        FleetMetric::Visits,
        FleetMetric::Visitors,
        FleetMetric::DaytimePopulation,
        FleetMetric::TradeAreaPopulation,
        FleetMetric::TradeAreaSize,
    ];

    /// the column header used for this metric in fleet files and output tables
    pub fn label(&self) -> &'static str {
        match self {
            FleetMetric::Visits => "Visits",
            FleetMetric::Visitors => "Visitors",
            FleetMetric::DaytimePopulation => "Daytime Population",
            FleetMetric::TradeAreaPopulation => "Trade Area Population",
            FleetMetric::TradeAreaSize => "Trade Area Size",
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            FleetMetric::Visits => "visits",
            FleetMetric::Visitors => "visitors",
            FleetMetric::DaytimePopulation => "daytime_population",
            FleetMetric::TradeAreaPopulation => "trade_area_population",
            FleetMetric::TradeAreaSize => "trade_area_size",
        }
    }
}

impl Display for FleetMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FleetMetric {
    type Err = String;

    /// accepts either the column label ("Trade Area Size") or the identifier
    /// ("trade_area_size"), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FleetMetric::ALL
            .into_iter()
            .find(|m| {
                m.label().eq_ignore_ascii_case(needle) || m.identifier().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let valid = FleetMetric::ALL.iter().map(|m| m.identifier());
                format!(
                    "unknown metric '{s}', must be one of: {}",
                    itertools::join(valid, ", ")
                )
            })
    }
}
