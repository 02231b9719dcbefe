//! alt-vulndb - vulnerability database builder for ALT Linux OVAL feeds
//!
//! This library turns the OVAL exports published by vuln-list-alt into
//! per-package advisories keyed by vulnerability ID, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`advisory_generation`): Feed records, resolution, evaluation and merging
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use alt_vulndb::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let store = JsonFileAdvisoryStore::open("alt-vulndb.json")?;
//! let use_case = UpdateAdvisoriesUseCase::new(
//!     FileSystemFeedReader::new(),
//!     store,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(UpdateRequest::new(PathBuf::from("/var/cache/trivy"), false))?;
//! println!("{}", response.summary());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod advisory_generation;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemFeedReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::storage::{InMemoryAdvisoryStore, JsonFileAdvisoryStore};
    pub use crate::advisory_generation::domain::{
        Advisory, AdvisoryMap, BucketKey, Entry, OvalFeed, Severity, VendorCatalog,
        VendorCatalogRecord, VulnerabilityRecord,
    };
    pub use crate::advisory_generation::services::{
        AdvisoryBuilder, AdvisoryMerger, CriteriaEvaluator, ReferenceResolver,
    };
    pub use crate::application::dto::{
        LookupRequest, LookupResponse, OutputFormat, UpdateRequest, UpdateResponse,
    };
    pub use crate::application::use_cases::{LookupAdvisoriesUseCase, UpdateAdvisoriesUseCase};
    pub use crate::ports::outbound::{
        AdvisoryStore, AdvisoryTransaction, FeedReader, LookupFormatter, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
