/// Ports - the traits separating use cases from infrastructure
///
/// Only driven (outbound) ports exist; the CLI calls use cases directly.
pub mod outbound;
