/// Request and response types exchanged between adapters and use cases
mod lookup_request;
mod lookup_response;
mod output_format;
mod update_request;
mod update_response;

pub use lookup_request::LookupRequest;
pub use lookup_response::{AdvisoryView, LookupResponse};
pub use output_format::OutputFormat;
pub use update_request::UpdateRequest;
pub use update_response::UpdateResponse;
