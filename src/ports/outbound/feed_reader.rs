use crate::advisory_generation::domain::OvalFeed;
use crate::shared::Result;
use std::path::Path;

/// FeedReader port for reading a vuln-list-alt OVAL tree
///
/// The tree is laid out as `<oval_root>/<branch>/<product>/` with four JSON
/// files per product directory. Implementations list directories in sorted
/// order so runs are reproducible.
pub trait FeedReader {
    /// Lists branch directory names under the OVAL root, sorted
    ///
    /// # Errors
    /// Returns an error if the root is missing or cannot be listed.
    fn branches(&self, oval_root: &Path) -> Result<Vec<String>>;

    /// Lists product directory names of one branch, sorted
    fn products(&self, oval_root: &Path, branch: &str) -> Result<Vec<String>>;

    /// Reads and decodes the objects, states, tests, and definitions of one product
    ///
    /// # Errors
    /// Returns `VulnDbError::Io` when a file is missing or unreadable and
    /// `VulnDbError::Decode` when a file is not valid JSON of the expected shape.
    fn read_product(&self, oval_root: &Path, branch: &str, product: &str) -> Result<OvalFeed>;
}
