use crate::advisory_generation::domain::oval::Matcher;
use crate::advisory_generation::domain::{FactTable, RawObject, RawState, RawTest, ResolvedFact};
use crate::shared::error::{ReferenceKind, VulnDbError};
use crate::shared::Result;
use std::collections::HashMap;

/// ReferenceResolver joins tests with the objects and states they point at
///
/// Pure logic over one product directory's tables. A dangling object or state
/// reference aborts resolution; a state whose matchers have an unsupported
/// shape simply contributes nothing.
pub struct ReferenceResolver;

impl ReferenceResolver {
    const ARCH_DATATYPE: &'static str = "string";
    const ARCH_OPERATIONS: [&'static str; 2] = ["pattern match", "equals"];
    const EVR_DATATYPE: &'static str = "evr_string";
    const EVR_OPERATION: &'static str = "less than";

    /// Resolves every test into a [`ResolvedFact`] keyed by test ID
    ///
    /// # Errors
    /// Returns `VulnDbError::Reference` naming the missing ID and the owning
    /// test when a non-empty object or state reference cannot be found.
    pub fn resolve(objects: &[RawObject], states: &[RawState], tests: &[RawTest]) -> Result<FactTable> {
        let object_names: HashMap<&str, &str> = objects
            .iter()
            .map(|o| (o.id.as_str(), o.name.as_str()))
            .collect();
        let states_by_id: HashMap<&str, &RawState> =
            states.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut facts = FactTable::with_capacity(tests.len());
        for test in tests {
            let fact = Self::resolve_test(test, &object_names, &states_by_id)?;
            facts.insert(test.id.clone(), fact);
        }

        Ok(facts)
    }

    fn resolve_test(
        test: &RawTest,
        object_names: &HashMap<&str, &str>,
        states_by_id: &HashMap<&str, &RawState>,
    ) -> Result<ResolvedFact> {
        let mut fact = ResolvedFact::default();

        let object_ref = test.object_ref();
        if object_ref.is_empty() {
            return Ok(fact);
        }
        let name = object_names.get(object_ref).ok_or_else(|| VulnDbError::Reference {
            kind: ReferenceKind::Object,
            missing_ref: object_ref.to_string(),
            test_id: test.id.clone(),
        })?;
        fact.package_name = name.to_string();

        let state_ref = test.state_ref();
        if state_ref.is_empty() {
            return Ok(fact);
        }
        let state = states_by_id.get(state_ref).ok_or_else(|| VulnDbError::Reference {
            kind: ReferenceKind::State,
            missing_ref: state_ref.to_string(),
            test_id: test.id.clone(),
        })?;

        if Self::is_arch_matcher(&state.arch) {
            fact.arch_pattern = state.arch.text.clone();
        }
        if Self::is_fixed_version_matcher(&state.evr) {
            fact.fixed_version = state.evr.text.clone();
        }

        Ok(fact)
    }

    fn is_arch_matcher(matcher: &Matcher) -> bool {
        matcher.datatype == Self::ARCH_DATATYPE
            && Self::ARCH_OPERATIONS.contains(&matcher.operation.as_str())
    }

    /// A "less than" EVR bound names the first fixed version
    fn is_fixed_version_matcher(matcher: &Matcher) -> bool {
        matcher.datatype == Self::EVR_DATATYPE && matcher.operation == Self::EVR_OPERATION
    }
}
