// ⚠️ Catalog errors
//
// Projection never fails. These only surface when a caller hands us a string
// from outside (CLI args, URL paths, stored labels) or when a registry check
// finds bad data.

use thiserror::Error;

use crate::domain::Domain;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("no category labelled {label:?} in the {domain} registry")]
    UnknownLabel { domain: Domain, label: String },

    #[error("unknown category domain: {0:?} (expected \"outlooks\" or \"alerts\")")]
    UnknownDomain(String),

    #[error("label {label:?} appears more than once in the {domain} registry")]
    DuplicateLabel { domain: Domain, label: String },

    #[error("{domain} registry is empty")]
    EmptyRegistry { domain: Domain },
}

pub type Result<T> = std::result::Result<T, CategoryError>;
