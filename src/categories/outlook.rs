// 🌪️ Outlook Categories - convective outlook products, Day 1 through Day 8
//
// Order matches the upstream product list. Add new products at the position
// upstream declares them, never by re-sorting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::domain::Domain;
use crate::error::CategoryError;
use crate::registry::HazardCategory;

/// One convective outlook product.
///
/// Serializes as its display label, e.g. `"Day 1 Categorical"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OutlookCategory {
    #[strum(to_string = "Day 1 Categorical")]
    Day1Categorical,
    #[strum(to_string = "Day 1 Tornado")]
    Day1Tornado,
    #[strum(to_string = "Day 1 Wind")]
    Day1Wind,
    #[strum(to_string = "Day 1 Hail")]
    Day1Hail,
    #[strum(to_string = "Day 1 Significant Tornado")]
    Day1SignificantTornado,
    #[strum(to_string = "Day 1 Significant Wind")]
    Day1SignificantWind,
    #[strum(to_string = "Day 1 Significant Hail")]
    Day1SignificantHail,
    #[strum(to_string = "Day 2 Categorical")]
    Day2Categorical,
    #[strum(to_string = "Day 2 Tornado")]
    Day2Tornado,
    #[strum(to_string = "Day 2 Wind")]
    Day2Wind,
    #[strum(to_string = "Day 2 Hail")]
    Day2Hail,
    #[strum(to_string = "Day 2 Significant Tornado")]
    Day2SignificantTornado,
    #[strum(to_string = "Day 2 Significant Wind")]
    Day2SignificantWind,
    #[strum(to_string = "Day 2 Significant Hail")]
    Day2SignificantHail,
    #[strum(to_string = "Day 3 Categorical")]
    Day3Categorical,
    #[strum(to_string = "Day 3 Probabilistic")]
    Day3Probabilistic,
    #[strum(to_string = "Day 3 Significant Probabilistic")]
    Day3SignificantProbabilistic,
    #[strum(to_string = "Day 4 Probabilistic")]
    Day4Probabilistic,
    #[strum(to_string = "Day 5 Probabilistic")]
    Day5Probabilistic,
    #[strum(to_string = "Day 6 Probabilistic")]
    Day6Probabilistic,
    #[strum(to_string = "Day 7 Probabilistic")]
    Day7Probabilistic,
    #[strum(to_string = "Day 8 Probabilistic")]
    Day8Probabilistic,
}

impl HazardCategory for OutlookCategory {
    const DOMAIN: Domain = Domain::Outlooks;
}

impl TryFrom<String> for OutlookCategory {
    type Error = CategoryError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlook_registry_size() {
        assert_eq!(OutlookCategory::all_categories().len(), 22);
        assert_eq!(OutlookCategory::COUNT, 22);
    }

    #[test]
    fn test_outlook_first_and_last() {
        let all = OutlookCategory::all_categories();
        assert_eq!(all.first().map(|c| c.label()), Some("Day 1 Categorical"));
        assert_eq!(all.last().map(|c| c.label()), Some("Day 8 Probabilistic"));
    }

    #[test]
    fn test_outlook_day_three_block_order() {
        let labels: Vec<&str> = OutlookCategory::all_categories()
            .into_iter()
            .map(|c| c.label())
            .skip(14)
            .take(3)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Day 3 Categorical",
                "Day 3 Probabilistic",
                "Day 3 Significant Probabilistic",
            ]
        );
    }

    #[test]
    fn test_outlook_serializes_as_label() {
        let json = serde_json::to_string(&OutlookCategory::Day2SignificantHail).unwrap();
        assert_eq!(json, r#""Day 2 Significant Hail""#);

        let parsed: OutlookCategory = serde_json::from_str(r#""Day 5 Probabilistic""#).unwrap();
        assert_eq!(parsed, OutlookCategory::Day5Probabilistic);
    }

    #[test]
    fn test_outlook_rejects_unknown_label() {
        let parsed = serde_json::from_str::<OutlookCategory>(r#""Day 9 Probabilistic""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_outlook_display_is_label() {
        assert_eq!(OutlookCategory::Day1Tornado.to_string(), "Day 1 Tornado");
    }
}
