/// Crate-wide Result alias.
///
/// Typed failures are raised as [`crate::shared::error::VulnDbError`] and carried
/// inside `anyhow::Error`, so callers can add file/record context with
/// `.context(...)` and still `downcast_ref` to the original variant.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
