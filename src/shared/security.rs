use crate::shared::error::VulnDbError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single feed file (256 MB)
///
/// The largest upstream definitions.json files are well under this; anything
/// bigger is treated as a corrupt or hostile export.
pub const MAX_FEED_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Maximum size of the advisory database file (2 GB)
pub const MAX_DATABASE_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| VulnDbError::Io {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns `VulnDbError::Io` if the path is missing, and a security error if
/// it is a symbolic link or not a regular file.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| VulnDbError::Io {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a path is an existing directory
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(VulnDbError::InvalidFeedRoot {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(VulnDbError::InvalidFeedRoot {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
