/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (identity provider, advisory API,
/// spreadsheet storage, console and wall clock).
pub mod access_token_provider;
pub mod advisory_api;
pub mod clock;
pub mod progress_reporter;
pub mod table_store;

pub use access_token_provider::{AccessToken, AccessTokenProvider};
pub use advisory_api::{AdvisoryApi, AdvisoryQueryOutcome};
pub use clock::Clock;
pub use progress_reporter::ProgressReporter;
pub use table_store::TableStore;
