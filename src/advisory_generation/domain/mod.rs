pub mod advisory;
pub mod data_source;
pub mod fact;
pub mod oval;
pub mod severity;
pub mod vendor_catalog;

pub use advisory::{Advisory, AdvisoryMap, BucketKey, Entry, VulnerabilityRecord};
pub use data_source::DataSource;
pub use fact::{AffectedPackage, FactTable, ResolvedFact};
pub use oval::{CriteriaNode, Definition, OvalFeed, RawObject, RawState, RawTest};
pub use severity::Severity;
pub use vendor_catalog::{VendorCatalog, VendorCatalogRecord};
