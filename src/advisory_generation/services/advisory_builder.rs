use crate::advisory_generation::domain::oval::{CrossReference, Metadata};
use crate::advisory_generation::domain::{
    BucketKey, Definition, Entry, FactTable, Severity, VendorCatalog, VendorCatalogRecord,
    VulnerabilityRecord,
};
use crate::advisory_generation::policies::VendorReferencePolicy;
use crate::advisory_generation::services::CriteriaEvaluator;

/// Entries produced from one product directory, plus counters for reporting
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub entries: Vec<(BucketKey, Entry)>,
    pub definitions: usize,
    pub skipped_unaffected: usize,
}

/// AdvisoryBuilder turns definitions into bucketed advisory entries
///
/// Also feeds the run's [`VendorCatalog`] with the vendor's own record and
/// one record per bulletin. Plain CVE cross-references are not cataloged.
pub struct AdvisoryBuilder;

impl AdvisoryBuilder {
    /// Builds entries for every definition of a product directory
    ///
    /// Entries come back as a list rather than a map so that two definitions
    /// landing in the same bucket are both kept for the merger.
    pub fn build(
        definitions: &[Definition],
        facts: &FactTable,
        catalog: &mut VendorCatalog,
    ) -> BuildOutcome {
        let mut outcome = BuildOutcome {
            definitions: definitions.len(),
            ..Default::default()
        };

        for definition in definitions {
            if VendorReferencePolicy::is_unaffected(&definition.id) {
                outcome.skipped_unaffected += 1;
                continue;
            }
            outcome
                .entries
                .extend(Self::build_definition(definition, facts, catalog));
        }

        outcome
    }

    /// Builds the entries of a single definition
    pub fn build_definition(
        definition: &Definition,
        facts: &FactTable,
        catalog: &mut VendorCatalog,
    ) -> Vec<(BucketKey, Entry)> {
        if VendorReferencePolicy::is_unaffected(&definition.id) {
            return Vec::new();
        }

        let affected: Vec<_> = CriteriaEvaluator::evaluate(&definition.criteria, facts)
            .into_iter()
            .filter(|pkg| !pkg.name.is_empty())
            .collect();
        if affected.is_empty() {
            return Vec::new();
        }

        let metadata = &definition.metadata;
        let vendor_id = VendorReferencePolicy::canonical_vendor_id(&metadata.references);
        let records = Self::vulnerability_records(&vendor_id, metadata);
        Self::catalog_records(&records[0], metadata, catalog);

        let platforms = &metadata.advisory.affected_cpes.cpes;
        let mut entries = Vec::new();

        for pkg in affected {
            let entry = Entry {
                fixed_version: pkg.fixed_version,
                arches: pkg.arches,
                affected_platforms: platforms.clone(),
                vulnerability_records: Vec::new(),
            };

            if !vendor_id.is_empty() {
                entries.push((
                    BucketKey::new(&pkg.name, &vendor_id),
                    Entry {
                        vulnerability_records: records
                            .iter()
                            .filter(|r| !r.id.is_empty())
                            .cloned()
                            .collect(),
                        ..entry
                    },
                ));
                continue;
            }

            // No errata: one bucket per identifier, the key carries the ID
            for record in records.iter().filter(|r| !r.id.is_empty()) {
                entries.push((
                    BucketKey::new(&pkg.name, &record.id),
                    Entry {
                        vulnerability_records: vec![VulnerabilityRecord::new("", record.severity)],
                        ..entry.clone()
                    },
                ));
            }
        }

        entries
    }

    /// Vendor record first, then bulletins, then CVEs
    fn vulnerability_records(vendor_id: &str, metadata: &Metadata) -> Vec<VulnerabilityRecord> {
        let advisory = &metadata.advisory;
        let vendor_record = VulnerabilityRecord::new(
            VendorReferencePolicy::vendor_record_id(vendor_id, &metadata.references),
            Severity::from_impact(&advisory.severity),
        );

        std::iter::once(vendor_record)
            .chain(advisory.bulletins.iter().map(Self::cross_reference_record))
            .chain(advisory.cves.iter().map(Self::cross_reference_record))
            .collect()
    }

    fn cross_reference_record(xref: &CrossReference) -> VulnerabilityRecord {
        VulnerabilityRecord::new(&xref.id, Severity::from_impact(&xref.impact))
    }

    fn catalog_records(vendor: &VulnerabilityRecord, metadata: &Metadata, catalog: &mut VendorCatalog) {
        catalog.add(VendorCatalogRecord {
            id: vendor.id.clone(),
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            references: VendorReferencePolicy::reference_urls(&metadata.references),
            severity: vendor.severity,
        });

        for bulletin in &metadata.advisory.bulletins {
            catalog.add(VendorCatalogRecord {
                id: bulletin.id.clone(),
                title: String::new(),
                description: String::new(),
                references: vec![bulletin.href.clone()],
                severity: Severity::from_impact(&bulletin.impact),
            });
        }
    }
}
