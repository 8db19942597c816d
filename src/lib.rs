// Hazard Catalog - Core Library
// Exposes the category registries and option projector for the CLI, API server, and tests

pub mod categories;
pub mod domain;
pub mod error;
pub mod option;
pub mod registry;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use categories::{AlertCategory, OutlookCategory};
pub use domain::Domain;
pub use error::CategoryError;
pub use option::CategoryOption;
pub use registry::{options, project, validate_registry, HazardCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Option list for every outlook category, in declaration order
pub fn outlook_options() -> Vec<CategoryOption> {
    options::<OutlookCategory>()
}

/// Option list for every alert category, in declaration order
pub fn alert_options() -> Vec<CategoryOption> {
    options::<AlertCategory>()
}
