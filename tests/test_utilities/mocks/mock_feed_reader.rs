use alt_vulndb::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Mock FeedReader serving decoded feeds from memory
#[derive(Default)]
pub struct MockFeedReader {
    pub feeds: BTreeMap<String, BTreeMap<String, OvalFeed>>,
    pub failing_product: Option<(String, String)>,
}

impl MockFeedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, branch: &str, product: &str, feed: OvalFeed) -> Self {
        self.feeds
            .entry(branch.to_string())
            .or_default()
            .insert(product.to_string(), feed);
        self
    }

    /// Makes `read_product` fail for one branch/product pair
    pub fn with_failure(mut self, branch: &str, product: &str) -> Self {
        self.failing_product = Some((branch.to_string(), product.to_string()));
        self
    }
}

impl FeedReader for MockFeedReader {
    fn branches(&self, _oval_root: &Path) -> Result<Vec<String>> {
        Ok(self.feeds.keys().cloned().collect())
    }

    fn products(&self, _oval_root: &Path, branch: &str) -> Result<Vec<String>> {
        Ok(self
            .feeds
            .get(branch)
            .map(|products| products.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn read_product(&self, _oval_root: &Path, branch: &str, product: &str) -> Result<OvalFeed> {
        if let Some((b, p)) = &self.failing_product {
            if b == branch && p == product {
                anyhow::bail!("Mock feed read failure");
            }
        }
        self.feeds
            .get(branch)
            .and_then(|products| products.get(product))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No mock feed for {}/{}", branch, product))
    }
}
