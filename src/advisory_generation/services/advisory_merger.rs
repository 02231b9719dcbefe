use crate::advisory_generation::domain::{AdvisoryMap, BucketKey, Entry};

/// AdvisoryMerger folds entries from many product directories into one map
///
/// Within a bucket, entries with the same fixed version and the same ordered
/// arch list collapse into one whose platform list is the union of both.
/// Anything else becomes an additional variant appended to the bucket.
pub struct AdvisoryMerger;

impl AdvisoryMerger {
    /// Merges `entries` into `advisories` in order
    pub fn merge(advisories: &mut AdvisoryMap, entries: impl IntoIterator<Item = (BucketKey, Entry)>) {
        for (key, entry) in entries {
            Self::merge_entry(advisories, key, entry);
        }
    }

    pub fn merge_entry(advisories: &mut AdvisoryMap, key: BucketKey, entry: Entry) {
        let advisory = advisories.entry(key).or_default();

        match advisory.entries.iter_mut().find(|e| e.same_variant(&entry)) {
            Some(existing) => {
                Self::union_platforms(&mut existing.affected_platforms, &entry.affected_platforms)
            }
            None => advisory.entries.push(entry),
        }
    }

    /// Appends platforms from `incoming` not already present, keeping first-seen order
    pub fn union_platforms(existing: &mut Vec<String>, incoming: &[String]) {
        for platform in incoming {
            if !existing.contains(platform) {
                existing.push(platform.clone());
            }
        }
    }
}
