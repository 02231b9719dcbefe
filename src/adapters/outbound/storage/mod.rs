/// Advisory database adapters
mod in_memory_store;
mod json_file_store;
mod snapshot;

pub use in_memory_store::InMemoryAdvisoryStore;
pub use json_file_store::JsonFileAdvisoryStore;
pub use snapshot::{PackageAdvisories, StoreSnapshot};
