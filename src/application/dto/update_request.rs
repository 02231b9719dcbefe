use std::path::PathBuf;

/// Input of the update use case
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// Directory containing `vuln-list-alt/oval`
    pub feed_root: PathBuf,
    /// Build everything but persist nothing
    pub dry_run: bool,
}

impl UpdateRequest {
    pub fn new(feed_root: PathBuf, dry_run: bool) -> Self {
        Self { feed_root, dry_run }
    }

    /// `<feed_root>/vuln-list-alt/oval`
    pub fn oval_root(&self) -> PathBuf {
        self.feed_root.join("vuln-list-alt").join("oval")
    }
}
