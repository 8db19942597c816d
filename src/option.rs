// 🔘 Option record - what a dropdown or API listing sees for one category

use serde::{Deserialize, Serialize};

use crate::registry::HazardCategory;

/// One selectable entry. `name` is the category's display label, verbatim.
///
/// Serialized shape is `{"name": "<label>"}`; consumers key on the field
/// name, so it must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryOption {
    pub name: String,
}

impl CategoryOption {
    pub fn new(name: impl Into<String>) -> Self {
        CategoryOption { name: name.into() }
    }

    /// Build the option for a single category
    pub fn from_category<C: HazardCategory>(category: C) -> Self {
        CategoryOption::new(category.label())
    }
}
