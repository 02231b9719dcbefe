use crate::shared::error::VulnDbError;
use crate::shared::Result;

/// Input of the lookup use case: one package on one platform (CPE)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub package_name: String,
    pub platform: String,
}

impl LookupRequest {
    /// Creates a request, rejecting blank package or platform names
    pub fn new(package_name: impl Into<String>, platform: impl Into<String>) -> Result<Self> {
        let package_name = package_name.into();
        let platform = platform.into();

        if package_name.trim().is_empty() {
            return Err(VulnDbError::Validation {
                message: "Package name must not be empty".to_string(),
            }
            .into());
        }
        if platform.trim().is_empty() {
            return Err(VulnDbError::Validation {
                message: "Platform CPE must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            package_name,
            platform,
        })
    }
}
