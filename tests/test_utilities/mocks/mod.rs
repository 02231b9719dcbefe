/// Mock implementations for testing
mod mock_advisory_store;
mod mock_feed_reader;
mod mock_progress_reporter;

pub use mock_advisory_store::FailingAdvisoryStore;
pub use mock_feed_reader::MockFeedReader;
pub use mock_progress_reporter::MockProgressReporter;
