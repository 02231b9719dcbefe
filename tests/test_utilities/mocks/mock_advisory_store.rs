use alt_vulndb::prelude::*;
use std::cell::Cell;

/// Mock AdvisoryStore whose batches always fail
#[derive(Default)]
pub struct FailingAdvisoryStore {
    pub attempts: Cell<usize>,
}

impl FailingAdvisoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdvisoryStore for FailingAdvisoryStore {
    fn batch_update(
        &self,
        _update: &mut dyn FnMut(&mut dyn AdvisoryTransaction) -> Result<()>,
    ) -> Result<()> {
        self.attempts.set(self.attempts.get() + 1);
        anyhow::bail!("Mock storage failure")
    }

    fn for_each_advisory(
        &self,
        _bucket_path: &[&str],
        _package_name: &str,
    ) -> Result<Vec<(String, Vec<u8>)>> {
        anyhow::bail!("Mock storage failure")
    }
}
