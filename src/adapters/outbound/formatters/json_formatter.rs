use crate::application::dto::{AdvisoryView, LookupResponse};
use crate::ports::outbound::LookupFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LookupDocument<'a> {
    package: &'a str,
    platform: &'a str,
    advisories: &'a [AdvisoryView],
}

/// JsonFormatter adapter rendering lookup results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupFormatter for JsonFormatter {
    fn format(&self, response: &LookupResponse) -> Result<String> {
        let document = LookupDocument {
            package: &response.package_name,
            platform: &response.platform,
            advisories: &response.advisories,
        };
        serde_json::to_string_pretty(&document).context("Failed to serialize lookup results to JSON")
    }
}
