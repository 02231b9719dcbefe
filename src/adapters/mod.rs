/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: the filesystem feed reader, the
/// advisory database, output formatters, and console reporting.
pub mod outbound;
