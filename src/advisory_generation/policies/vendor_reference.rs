use crate::advisory_generation::domain::oval::Reference;

/// VendorReferencePolicy encodes ALT Linux conventions for picking vendor
/// identifiers out of a definition.
///
/// Rules:
/// 1. Definitions whose ID contains `unaffected` describe packages that are
///    not vulnerable and carry no entries.
/// 2. The canonical vendor ID comes from a reference whose source is `ALTPU`
///    (a patch-update errata). When several qualify the last one wins.
/// 3. The ID of the vendor's own vulnerability record is the canonical vendor
///    ID when present, else the first reference whose ID contains `ALT`.
pub struct VendorReferencePolicy;

impl VendorReferencePolicy {
    pub const UNAFFECTED_MARKER: &'static str = "unaffected";
    pub const PATCH_UPDATE_SOURCE: &'static str = "ALTPU";
    pub const VENDOR_BRAND: &'static str = "ALT";

    pub fn is_unaffected(definition_id: &str) -> bool {
        definition_id.contains(Self::UNAFFECTED_MARKER)
    }

    /// Returns the canonical vendor ID, or an empty string when no reference qualifies
    pub fn canonical_vendor_id(references: &[Reference]) -> String {
        references
            .iter()
            .rev()
            .find(|r| r.source == Self::PATCH_UPDATE_SOURCE)
            .map(|r| r.ref_id.clone())
            .unwrap_or_default()
    }

    /// Returns the ID for the vendor's own vulnerability record
    ///
    /// May be empty; callers treat an empty ID as a soft failure.
    pub fn vendor_record_id(canonical_id: &str, references: &[Reference]) -> String {
        if !canonical_id.is_empty() {
            return canonical_id.to_string();
        }
        references
            .iter()
            .find(|r| r.ref_id.contains(Self::VENDOR_BRAND))
            .map(|r| r.ref_id.clone())
            .unwrap_or_default()
    }

    /// Collects reference URLs, skipping blanks
    pub fn reference_urls(references: &[Reference]) -> Vec<String> {
        references
            .iter()
            .filter(|r| !r.ref_url.is_empty())
            .map(|r| r.ref_url.clone())
            .collect()
    }
}
