// 🗂️ Category Registry + Option Projector
//
// Each registry is a closed enum whose variants carry their display label
// through strum. Declaration order is the registry order: EnumIter walks the
// variants top to bottom, so every call sees the same sequence.

use std::collections::HashSet;
use std::fmt::Debug;
use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

use crate::domain::Domain;
use crate::error::{CategoryError, Result};
use crate::option::CategoryOption;

// ============================================================================
// REGISTRY TRAIT
// ============================================================================

/// A fixed, ordered set of hazard categories for one domain.
///
/// The symbolic variant name stays internal. Everything a consumer sees goes
/// through [`HazardCategory::label`].
pub trait HazardCategory:
    Copy + Eq + Debug + IntoEnumIterator + EnumCount + FromStr + Into<&'static str> + 'static
{
    /// Which registry this is
    const DOMAIN: Domain;

    /// Every declared category, in declaration order
    fn all_categories() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Display label, exactly as declared
    fn label(self) -> &'static str {
        self.into()
    }

    /// Exact, case-sensitive reverse lookup from a display label
    fn from_label(label: &str) -> Result<Self> {
        Self::from_str(label).map_err(|_| CategoryError::UnknownLabel {
            domain: Self::DOMAIN,
            label: label.to_string(),
        })
    }
}

// ============================================================================
// OPTION PROJECTOR
// ============================================================================

/// Turn a sequence of labels into option records, one per label, same order.
///
/// An empty input gives an empty list.
pub fn project<I>(labels: I) -> Vec<CategoryOption>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| CategoryOption::new(label.as_ref()))
        .collect()
}

/// Full option list for a registry.
///
/// A fresh `Vec` on every call; nothing is cached.
pub fn options<C: HazardCategory>() -> Vec<CategoryOption> {
    project(C::iter().map(C::label))
}

// ============================================================================
// REGISTRY CHECKS
// ============================================================================

/// Check that a registry is non-empty and its labels are unique.
///
/// Meant for tests and the `check` command, not for every lookup.
pub fn validate_registry<C: HazardCategory>() -> Result<()> {
    let mut seen = HashSet::with_capacity(C::COUNT);

    for category in C::iter() {
        let label = category.label();
        if !seen.insert(label) {
            return Err(CategoryError::DuplicateLabel {
                domain: C::DOMAIN,
                label: label.to_string(),
            });
        }
    }

    if seen.is_empty() {
        return Err(CategoryError::EmptyRegistry { domain: C::DOMAIN });
    }

    debug!(domain = %C::DOMAIN, count = seen.len(), "registry labels are unique");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlertCategory, OutlookCategory};

    #[test]
    fn test_project_preserves_order() {
        let projected = project(["Tornado Watch", "Flood Watch", "Gale Watch"]);
        let names: Vec<&str> = projected.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Tornado Watch", "Flood Watch", "Gale Watch"]);
    }

    #[test]
    fn test_project_empty_input_yields_empty_list() {
        let projected = project(Vec::<String>::new());
        assert!(projected.is_empty());
    }

    #[test]
    fn test_options_match_labels_positionally() {
        let categories = OutlookCategory::all_categories();
        let opts = options::<OutlookCategory>();

        assert_eq!(opts.len(), categories.len());
        for (option, category) in opts.iter().zip(categories) {
            assert_eq!(option.name, category.label());
        }
    }

    #[test]
    fn test_options_are_idempotent() {
        assert_eq!(options::<AlertCategory>(), options::<AlertCategory>());
        assert_eq!(options::<OutlookCategory>(), options::<OutlookCategory>());
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            AlertCategory::from_label("Tornado Warning"),
            Ok(AlertCategory::TornadoWarning)
        );
        assert!(AlertCategory::from_label("tornado warning").is_err());
        assert!(AlertCategory::from_label("Tornado Warning ").is_err());
    }

    #[test]
    fn test_from_label_rejects_symbol_names() {
        let err = AlertCategory::from_label("TornadoWarning").unwrap_err();
        assert_eq!(
            err,
            CategoryError::UnknownLabel {
                domain: Domain::Alerts,
                label: "TornadoWarning".to_string(),
            }
        );
    }

    #[test]
    fn test_from_label_round_trips_every_category() {
        for category in AlertCategory::all_categories() {
            assert_eq!(AlertCategory::from_label(category.label()), Ok(category));
        }
        for category in OutlookCategory::all_categories() {
            assert_eq!(OutlookCategory::from_label(category.label()), Ok(category));
        }
    }

    #[test]
    fn test_validate_registries() {
        assert!(validate_registry::<OutlookCategory>().is_ok());
        assert!(validate_registry::<AlertCategory>().is_ok());
    }
}
