/// Shared kernel - error types, result alias, and file-system guards
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
