use crate::advisory_generation::domain::Severity;
use serde::Serialize;

/// One vulnerability affecting the looked-up package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryView {
    pub vulnerability_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vendor_ids: Vec<String>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fixed_version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arches: Vec<String>,
}

/// Output of the lookup use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResponse {
    pub package_name: String,
    pub platform: String,
    pub advisories: Vec<AdvisoryView>,
}

impl LookupResponse {
    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }
}
