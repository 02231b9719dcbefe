mod advisory_builder;
mod advisory_merger;
mod criteria_evaluator;
mod reference_resolver;

pub use advisory_builder::{AdvisoryBuilder, BuildOutcome};
pub use advisory_merger::AdvisoryMerger;
pub use criteria_evaluator::CriteriaEvaluator;
pub use reference_resolver::ReferenceResolver;
