//! psirt-annotate - annotate device inventories with Cisco PSIRT advisory counts
//!
//! This library reads a spreadsheet of network-device software versions,
//! queries the Cisco openVuln API for each distinct version and writes the
//! number of High and Critical advisories back as `psirt_high` and
//! `psirt_critical` columns. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`advisory_scan`): device families, versions, severity counting, rate limiting
//! - **Application Layer** (`application`): the advisory poller, its cache and the annotation use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): openVuln HTTP client, CSV storage, console output, system clock
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use psirt_annotate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let reporter = StderrProgressReporter::new();
//! let client = OpenVulnClient::new(Credentials::from_env()?, RateLimitPolicy::default())?;
//!
//! let poller = AdvisoryPoller::new(&client, &client, &reporter);
//! let lookup = CachingAdvisoryLookup::new(poller);
//! let store = CsvTableStore::new(PathBuf::from("Baseline_albr_extract.csv"));
//!
//! let use_case = AnnotateSpreadsheetUseCase::new(store, &lookup, &reporter);
//! let response = use_case.execute(AnnotateRequest::default())?;
//! println!("{} rows annotated", response.rows);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod advisory_scan;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::CsvTableStore;
    pub use crate::adapters::outbound::network::{Credentials, OpenVulnClient};
    pub use crate::adapters::outbound::system::SystemClock;
    pub use crate::advisory_scan::domain::{
        Advisory, AdvisoryResult, OsType, SeverityCounts, SoftwareVersion, SpreadsheetTable,
    };
    pub use crate::advisory_scan::services::{RateLimitPolicy, RateLimiter, SeverityCounter};
    pub use crate::application::dto::{AnnotateRequest, AnnotateResponse};
    pub use crate::application::services::{AdvisoryPoller, CachingAdvisoryLookup, OfflineLookup};
    pub use crate::application::use_cases::{
        AnnotateSpreadsheetUseCase, VerifyCredentialsUseCase, PSIRT_CRITICAL_COLUMN,
        PSIRT_HIGH_COLUMN,
    };
    pub use crate::ports::inbound::AdvisoryLookupPort;
    pub use crate::ports::outbound::{
        AccessToken, AccessTokenProvider, AdvisoryApi, AdvisoryQueryOutcome, Clock,
        ProgressReporter, TableStore,
    };
    pub use crate::shared::Result;
}
