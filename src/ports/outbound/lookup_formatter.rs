use crate::application::dto::LookupResponse;
use crate::shared::Result;

/// LookupFormatter port for rendering lookup results
pub trait LookupFormatter {
    /// Renders the advisories of a lookup response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &LookupResponse) -> Result<String>;
}
