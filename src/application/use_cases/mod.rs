/// Use cases orchestrating the domain services through the ports
mod lookup_advisories;
mod update_advisories;

pub use lookup_advisories::LookupAdvisoriesUseCase;
pub use update_advisories::{UpdateAdvisoriesUseCase, ROOT_BUCKET};
