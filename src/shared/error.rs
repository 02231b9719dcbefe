use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI jobs to distinguish between
/// bad invocations and failed database updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the update or lookup completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (feed I/O, decode, dangling reference, storage, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for building and querying the vulnerability database.
///
/// Every variant is fatal for the run that raised it. Soft failures
/// (dangling criteria test refs, unmatched state shapes, empty vendor IDs)
/// never surface as a `VulnDbError`.
#[derive(Debug, Error)]
pub enum VulnDbError {
    #[error("Failed to read {path}\nDetails: {details}\n\n💡 Hint: Please verify that the feed directory is complete and readable")]
    Io { path: PathBuf, details: String },

    #[error("Failed to decode {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid vuln-list-alt OVAL export")]
    Decode { path: PathBuf, details: String },

    #[error("Invalid tests data, can't find {kind} ref: {missing_ref}, test ref: {test_id}")]
    Reference {
        kind: ReferenceKind,
        missing_ref: String,
        test_id: String,
    },

    #[error("Storage failure at {path}\nDetails: {details}")]
    Storage { path: PathBuf, details: String },

    #[error("Failed to write output file: {path}\nDetails: {details}")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid feed root: {path}\nReason: {reason}\n\n💡 Hint: Point --feed-dir at the directory that contains vuln-list-alt/oval")]
    InvalidFeedRoot { path: PathBuf, reason: String },

    /// Validation error for builder patterns and request DTOs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Which side of a test record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Object,
    State,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Object => write!(f, "object"),
            ReferenceKind::State => write!(f, "ovalstate"),
        }
    }
}
