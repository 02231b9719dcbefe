use super::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vendor-level description of a vulnerability identifier.
///
/// Stored once per ID, independent of which packages the ID affects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCatalogRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub references: Vec<String>,
    pub severity: Severity,
}

/// Run-scoped accumulator of vendor catalog records.
///
/// Construct one per update run and hand it to the storage layer with
/// [`VendorCatalog::into_records`] when the run finishes. A later record for
/// the same ID replaces the earlier one.
#[derive(Debug, Default)]
pub struct VendorCatalog {
    records: BTreeMap<String, VendorCatalogRecord>,
    skipped_empty_ids: usize,
}

impl VendorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record; records without an ID are counted and dropped
    pub fn add(&mut self, record: VendorCatalogRecord) {
        if record.id.is_empty() {
            self.skipped_empty_ids += 1;
            return;
        }
        self.records.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<&VendorCatalogRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records dropped because their ID was empty
    pub fn skipped_empty_ids(&self) -> usize {
        self.skipped_empty_ids
    }

    /// Consumes the accumulator, yielding records ordered by ID
    pub fn into_records(self) -> Vec<VendorCatalogRecord> {
        self.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> VendorCatalogRecord {
        VendorCatalogRecord {
            id: id.to_string(),
            title: title.to_string(),
            severity: Severity::High,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut catalog = VendorCatalog::new();
        catalog.add(record("ALT-PU-2024-001", "libfoo update"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("ALT-PU-2024-001").unwrap().title, "libfoo update");
    }

    #[test]
    fn test_empty_id_is_skipped_and_counted() {
        let mut catalog = VendorCatalog::new();
        catalog.add(record("", "orphan"));

        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped_empty_ids(), 1);
    }

    #[test]
    fn test_later_record_replaces_earlier() {
        let mut catalog = VendorCatalog::new();
        catalog.add(record("BDU:2024-00001", "first"));
        catalog.add(record("BDU:2024-00001", "second"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("BDU:2024-00001").unwrap().title, "second");
    }

    #[test]
    fn test_into_records_is_sorted_by_id() {
        let mut catalog = VendorCatalog::new();
        catalog.add(record("CVE-2", ""));
        catalog.add(record("ALT-PU-1", ""));

        let ids: Vec<String> = catalog.into_records().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["ALT-PU-1", "CVE-2"]);
    }

    #[test]
    fn test_separate_catalogs_do_not_share_state() {
        let mut first = VendorCatalog::new();
        first.add(record("ALT-PU-1", ""));
        let second = VendorCatalog::new();

        assert!(second.is_empty());
    }
}
