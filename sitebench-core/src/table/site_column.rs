use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// role of a site within a comparison table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "position")]
pub enum SiteRole {
    Potential,
    /// 1-based position among the comparables present in the table
    Comparable(usize),
}

impl Display for SiteRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteRole::Potential => write!(f, "Potential"),
            SiteRole::Comparable(n) => write!(f, "Comp {n}"),
        }
    }
}

/// one value column of a [`super::ComparisonTable`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteColumn {
    pub site_name: String,
    pub role: SiteRole,
}

impl SiteColumn {
    pub fn potential(site_name: &str) -> SiteColumn {
        SiteColumn {
            site_name: site_name.to_string(),
            role: SiteRole::Potential,
        }
    }

    pub fn comparable(site_name: &str, position: usize) -> SiteColumn {
        SiteColumn {
            site_name: site_name.to_string(),
            role: SiteRole::Comparable(position),
        }
    }

    /// header text, such as "Northpoint (Potential)" or "Eastfield (Comp 2)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.site_name, self.role)
    }
}
