use crate::advisory_generation::domain::{Advisory, DataSource, VendorCatalogRecord};
use crate::ports::outbound::AdvisoryTransaction;
use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Advisories of one bucket path: package → vulnerability ID → advisory JSON
pub type PackageAdvisories = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

/// Whole content of an advisory database
///
/// Both store adapters keep one of these as committed state and hand a clone
/// to each batch as its transaction, so a failed batch leaves nothing behind.
/// Ordered maps keep the serialized file stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub data_sources: BTreeMap<String, DataSource>,
    /// Keyed by bucket path joined with `/`
    pub advisories: BTreeMap<String, PackageAdvisories>,
    /// Vulnerability ID → source tag → detail
    pub vulnerability_details: BTreeMap<String, BTreeMap<String, VendorCatalogRecord>>,
    pub vulnerability_ids: BTreeSet<String>,
}

impl StoreSnapshot {
    pub fn bucket_key(bucket_path: &[&str]) -> String {
        bucket_path.join("/")
    }

    /// Raw advisory JSON of a package, ordered by vulnerability ID
    pub fn advisories_for(&self, bucket_path: &[&str], package_name: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let Some(packages) = self.advisories.get(&Self::bucket_key(bucket_path)) else {
            return Ok(Vec::new());
        };
        let Some(by_id) = packages.get(package_name) else {
            return Ok(Vec::new());
        };

        by_id
            .iter()
            .map(|(id, value)| {
                let raw = serde_json::to_vec(value)
                    .with_context(|| format!("Failed to encode stored advisory {}", id))?;
                Ok((id.clone(), raw))
            })
            .collect()
    }

    /// Keeps only IDs still referenced by an advisory or a detail
    fn prune_vulnerability_ids(&mut self) {
        let referenced: BTreeSet<&String> = self
            .advisories
            .values()
            .flat_map(|packages| packages.values())
            .flat_map(|by_id| by_id.keys())
            .chain(self.vulnerability_details.keys())
            .collect();

        let kept: BTreeSet<String> = self
            .vulnerability_ids
            .iter()
            .filter(|id| referenced.contains(id))
            .cloned()
            .collect();
        self.vulnerability_ids = kept;
    }
}

impl AdvisoryTransaction for StoreSnapshot {
    fn put_data_source(&mut self, bucket_name: &str, source: &DataSource) -> Result<()> {
        self.data_sources.insert(bucket_name.to_string(), source.clone());
        Ok(())
    }

    fn put_advisory_detail(
        &mut self,
        vulnerability_id: &str,
        package_name: &str,
        bucket_path: &[&str],
        advisory: &Advisory,
    ) -> Result<()> {
        let value = serde_json::to_value(advisory).with_context(|| {
            format!(
                "Failed to encode advisory {} for {}",
                vulnerability_id, package_name
            )
        })?;

        self.advisories
            .entry(Self::bucket_key(bucket_path))
            .or_default()
            .entry(package_name.to_string())
            .or_default()
            .insert(vulnerability_id.to_string(), value);
        Ok(())
    }

    fn put_vulnerability_detail(
        &mut self,
        vulnerability_id: &str,
        source: &str,
        detail: &VendorCatalogRecord,
    ) -> Result<()> {
        self.vulnerability_details
            .entry(vulnerability_id.to_string())
            .or_default()
            .insert(source.to_string(), detail.clone());
        Ok(())
    }

    fn put_vulnerability_id(&mut self, vulnerability_id: &str) -> Result<()> {
        self.vulnerability_ids.insert(vulnerability_id.to_string());
        Ok(())
    }

    fn delete_bucket(&mut self, bucket_path: &[&str]) -> Result<()> {
        let key = Self::bucket_key(bucket_path);
        let nested_prefix = format!("{}/", key);
        self.advisories
            .retain(|bucket, _| bucket != &key && !bucket.starts_with(&nested_prefix));
        self.prune_vulnerability_ids();
        Ok(())
    }

    fn delete_vulnerability_details(&mut self, source: &str) -> Result<()> {
        self.vulnerability_details.retain(|_, by_source| {
            by_source.remove(source);
            !by_source.is_empty()
        });
        self.prune_vulnerability_ids();
        Ok(())
    }
}
