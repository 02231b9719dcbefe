use super::snapshot::StoreSnapshot;
use crate::ports::outbound::{AdvisoryStore, AdvisoryTransaction};
use crate::shared::Result;
use std::cell::RefCell;

/// InMemoryAdvisoryStore adapter keeping the database in memory
///
/// Nothing outlives the process. Used for dry runs and as a test double with
/// the same all-or-nothing batch semantics as the file store.
#[derive(Debug, Default)]
pub struct InMemoryAdvisoryStore {
    committed: RefCell<StoreSnapshot>,
}

impl InMemoryAdvisoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed state
    pub fn snapshot(&self) -> StoreSnapshot {
        self.committed.borrow().clone()
    }
}

impl AdvisoryStore for InMemoryAdvisoryStore {
    fn batch_update(
        &self,
        update: &mut dyn FnMut(&mut dyn AdvisoryTransaction) -> Result<()>,
    ) -> Result<()> {
        let mut transaction = self.committed.borrow().clone();
        update(&mut transaction)?;
        *self.committed.borrow_mut() = transaction;
        Ok(())
    }

    fn for_each_advisory(&self, bucket_path: &[&str], package_name: &str) -> Result<Vec<(String, Vec<u8>)>> {
        self.committed.borrow().advisories_for(bucket_path, package_name)
    }
}
