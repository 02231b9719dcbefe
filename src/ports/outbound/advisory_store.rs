use crate::advisory_generation::domain::{Advisory, DataSource, VendorCatalogRecord};
use crate::shared::Result;

/// Write operations available inside [`AdvisoryStore::batch_update`]
pub trait AdvisoryTransaction {
    /// Records provenance for a top-level bucket
    fn put_data_source(&mut self, bucket_name: &str, source: &DataSource) -> Result<()>;

    /// Upserts the advisory of `package_name` under `vulnerability_id`
    ///
    /// Overwrites whatever was stored for the same key.
    fn put_advisory_detail(
        &mut self,
        vulnerability_id: &str,
        package_name: &str,
        bucket_path: &[&str],
        advisory: &Advisory,
    ) -> Result<()>;

    /// Stores vendor catalog detail for an ID, keyed by source tag
    fn put_vulnerability_detail(
        &mut self,
        vulnerability_id: &str,
        source: &str,
        detail: &VendorCatalogRecord,
    ) -> Result<()>;

    /// Registers an ID in the set of known vulnerabilities
    fn put_vulnerability_id(&mut self, vulnerability_id: &str) -> Result<()>;

    /// Removes every advisory stored under `bucket_path` and its sub-buckets
    ///
    /// IDs no longer referenced by any advisory or detail are dropped too.
    fn delete_bucket(&mut self, bucket_path: &[&str]) -> Result<()>;

    /// Removes every vulnerability detail tagged with `source`
    ///
    /// IDs no longer referenced by any advisory or detail are dropped too.
    fn delete_vulnerability_details(&mut self, source: &str) -> Result<()>;
}

/// AdvisoryStore port for the persistent advisory database
pub trait AdvisoryStore {
    /// Runs `update` inside one transaction
    ///
    /// Writes become visible only when `update` returns `Ok`. Any error
    /// discards every write made by `update`.
    ///
    /// # Errors
    /// Returns the error raised by `update`, or `VulnDbError::Storage` when
    /// committing fails.
    fn batch_update(
        &self,
        update: &mut dyn FnMut(&mut dyn AdvisoryTransaction) -> Result<()>,
    ) -> Result<()>;

    /// Returns `(vulnerability_id, raw_json)` pairs stored for a package
    ///
    /// Pairs come back ordered by vulnerability ID. An unknown bucket or
    /// package yields an empty list.
    fn for_each_advisory(&self, bucket_path: &[&str], package_name: &str) -> Result<Vec<(String, Vec<u8>)>>;
}
