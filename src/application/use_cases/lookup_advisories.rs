use crate::advisory_generation::domain::Advisory;
use crate::application::dto::{AdvisoryView, LookupRequest, LookupResponse};
use crate::application::use_cases::update_advisories::ROOT_BUCKET;
use crate::ports::outbound::AdvisoryStore;
use crate::shared::error::VulnDbError;
use crate::shared::Result;
use anyhow::Context;
use std::path::PathBuf;

/// LookupAdvisoriesUseCase - lists the advisories affecting a package on one platform
///
/// # Type Parameters
/// * `S` - AdvisoryStore implementation
pub struct LookupAdvisoriesUseCase<S> {
    store: S,
}

impl<S: AdvisoryStore> LookupAdvisoriesUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the lookup
    ///
    /// Only entries whose affected-platform list contains the requested CPE
    /// match. Each vulnerability record of a matching entry yields one view.
    ///
    /// # Errors
    /// Returns `VulnDbError::Decode` if a stored advisory is not valid JSON.
    pub fn execute(&self, request: LookupRequest) -> Result<LookupResponse> {
        let stored = self
            .store
            .for_each_advisory(&[ROOT_BUCKET], &request.package_name)
            .context("Unable to iterate advisories")?;

        let mut advisories = Vec::new();
        for (bucket_id, content) in stored {
            if content.is_empty() {
                continue;
            }

            let advisory: Advisory =
                serde_json::from_slice(&content).map_err(|e| VulnDbError::Decode {
                    path: PathBuf::from(ROOT_BUCKET)
                        .join(&request.package_name)
                        .join(&bucket_id),
                    details: e.to_string(),
                })?;

            for entry in advisory
                .entries
                .iter()
                .filter(|e| e.applies_to_platform(&request.platform))
            {
                advisories.extend(entry.vulnerability_records.iter().map(|record| {
                    // Records keep their own ID only inside vendor buckets
                    let (vulnerability_id, vendor_ids) = if record.id.is_empty() {
                        (bucket_id.clone(), Vec::new())
                    } else {
                        (record.id.clone(), vec![bucket_id.clone()])
                    };

                    AdvisoryView {
                        vulnerability_id,
                        vendor_ids,
                        severity: record.severity,
                        fixed_version: entry.fixed_version.clone(),
                        arches: entry.arches.clone(),
                    }
                }));
            }
        }

        Ok(LookupResponse {
            package_name: request.package_name,
            platform: request.platform,
            advisories,
        })
    }
}
