use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance metadata recorded once per update run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

impl DataSource {
    pub const ALT_ID: &'static str = "alt";
    pub const ALT_NAME: &'static str = "ALT Linux OVAL";
    pub const ALT_URL: &'static str = "https://rdb.altlinux.org";

    /// The ALT Linux OVAL source, stamped with the given update time
    pub fn alt(updated_at: DateTime<Utc>) -> Self {
        Self {
            id: Self::ALT_ID.to_string(),
            name: Self::ALT_NAME.to_string(),
            url: Self::ALT_URL.to_string(),
            updated_at,
        }
    }
}
