/// Outbound ports - interfaces the use cases need from the outside world
///
/// Feed access, the advisory database, rendering, output, and progress
/// reporting are all reached through these traits.
pub mod advisory_store;
pub mod feed_reader;
pub mod lookup_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use advisory_store::{AdvisoryStore, AdvisoryTransaction};
pub use feed_reader::FeedReader;
pub use lookup_formatter::LookupFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
