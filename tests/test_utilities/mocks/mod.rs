/// Mock implementations for testing
mod fake_clock;
mod mock_advisory_api;
mod mock_progress_reporter;
mod mock_table_store;
mod mock_token_provider;

#[allow(unused_imports)]
pub use fake_clock::FakeClock;
#[allow(unused_imports)]
pub use mock_advisory_api::MockAdvisoryApi;
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_table_store::MockTableStore;
#[allow(unused_imports)]
pub use mock_token_provider::MockTokenProvider;
