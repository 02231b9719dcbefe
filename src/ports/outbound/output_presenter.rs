use crate::shared::Result;

/// OutputPresenter port for delivering rendered lookup results
///
/// Implementations write to stdout or a file.
pub trait OutputPresenter {
    /// Delivers the rendered content
    ///
    /// # Errors
    /// Returns `VulnDbError::FileWrite` if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
