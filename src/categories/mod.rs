// Hazard category registries
//
// Each registry is fixed at build time. Labels are copied from the upstream
// product list character for character; symbols are ours.

pub mod alert;
pub mod outlook;

pub use alert::AlertCategory;
pub use outlook::OutlookCategory;
