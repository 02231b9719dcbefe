/// Filesystem adapters: feed reading and output files
mod feed_reader;
mod file_writer;

pub use feed_reader::{
    FileSystemFeedReader, DEFINITIONS_FILE, OBJECTS_FILE, STATES_FILE, TESTS_FILE,
};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
