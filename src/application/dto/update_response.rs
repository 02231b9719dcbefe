/// Summary of an update run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResponse {
    pub branches: usize,
    pub products: usize,
    pub definitions: usize,
    pub skipped_unaffected: usize,
    pub buckets: usize,
    pub entries: usize,
    pub catalog_records: usize,
    /// Catalog records dropped because no vendor ID could be derived
    pub skipped_empty_ids: usize,
    pub persisted: bool,
}

impl UpdateResponse {
    /// One-line human summary used for the completion message
    pub fn summary(&self) -> String {
        format!(
            "{} branches, {} products, {} definitions ({} unaffected skipped) → {} advisories with {} entries, {} catalog records",
            self.branches,
            self.products,
            self.definitions,
            self.skipped_unaffected,
            self.buckets,
            self.entries,
            self.catalog_records
        )
    }
}
