// 🧭 Domain - picks a registry at runtime from a string key
//
// The CLI and the HTTP API only know "outlooks" or "alerts" as text. This is
// the one place that maps those keys onto the typed registries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::categories::{AlertCategory, OutlookCategory};
use crate::error::{CategoryError, Result};
use crate::option::CategoryOption;
use crate::registry::{options, validate_registry, HazardCategory};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Convective outlook products
    Outlooks,
    /// Weather alert event types
    Alerts,
}

impl Domain {
    /// Parse a key like `"alerts"` (case-insensitive, surrounding whitespace ignored)
    pub fn parse(key: &str) -> Result<Self> {
        key.trim()
            .parse()
            .map_err(|_| CategoryError::UnknownDomain(key.to_string()))
    }

    /// Stable lowercase key used in URLs and on the command line
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Option list for this domain's registry
    pub fn options(self) -> Vec<CategoryOption> {
        match self {
            Domain::Outlooks => options::<OutlookCategory>(),
            Domain::Alerts => options::<AlertCategory>(),
        }
    }

    /// Number of categories declared in this domain
    pub fn count(self) -> usize {
        match self {
            Domain::Outlooks => OutlookCategory::COUNT,
            Domain::Alerts => AlertCategory::COUNT,
        }
    }

    pub fn contains_label(self, label: &str) -> bool {
        self.lookup(label).is_ok()
    }

    /// Find the option for an exact display label
    pub fn lookup(self, label: &str) -> Result<CategoryOption> {
        match self {
            Domain::Outlooks => OutlookCategory::from_label(label).map(CategoryOption::from_category),
            Domain::Alerts => AlertCategory::from_label(label).map(CategoryOption::from_category),
        }
    }

    pub fn validate(self) -> Result<()> {
        match self {
            Domain::Outlooks => validate_registry::<OutlookCategory>(),
            Domain::Alerts => validate_registry::<AlertCategory>(),
        }
    }
}
