use super::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Join key of the merged output: one package under one vulnerability ID.
///
/// Ordered by package name first so iteration over an [`AdvisoryMap`] is
/// deterministic and groups a package's advisories together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    pub package_name: String,
    pub vulnerability_id: String,
}

impl BucketKey {
    pub fn new(package_name: impl Into<String>, vulnerability_id: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            vulnerability_id: vulnerability_id.into(),
        }
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package_name, self.vulnerability_id)
    }
}

/// A vulnerability ID with its severity, as stored inside an entry.
///
/// The ID is empty when the entry lives under a bucket that already names it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub severity: Severity,
}

impl VulnerabilityRecord {
    pub fn new(id: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            severity,
        }
    }
}

/// One version/architecture variant of an advisory for a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fixed_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arches: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_platforms: Vec<String>,
    #[serde(default)]
    pub vulnerability_records: Vec<VulnerabilityRecord>,
}

impl Entry {
    /// True when both entries describe the same fixed version and arch list.
    ///
    /// Arch lists are compared as ordered sequences.
    pub fn same_variant(&self, other: &Entry) -> bool {
        self.fixed_version == other.fixed_version && self.arches == other.arches
    }

    pub fn applies_to_platform(&self, platform: &str) -> bool {
        self.affected_platforms.iter().any(|p| p == platform)
    }
}

/// All entries stored for one bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub entries: Vec<Entry>,
}

impl Advisory {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

/// The merged result of a run
pub type AdvisoryMap = BTreeMap<BucketKey, Advisory>;
