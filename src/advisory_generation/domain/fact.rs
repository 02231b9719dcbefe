use std::collections::HashMap;

/// Concrete per-package facts obtained by following one test's references.
///
/// `package_name` is empty only when the test had no object reference.
/// `fixed_version` and `arch_pattern` stay empty unless the state carried a
/// matcher shape the resolver understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFact {
    pub package_name: String,
    pub fixed_version: String,
    /// Raw architecture text; may hold several arches joined by `|`
    pub arch_pattern: String,
}

/// Resolved facts keyed by test ID
pub type FactTable = HashMap<String, ResolvedFact>;

/// A package affected by a definition, as collected from its criteria tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedPackage {
    pub name: String,
    pub fixed_version: String,
    /// Empty means every architecture
    pub arches: Vec<String>,
}

impl AffectedPackage {
    /// Derives an affected package from a fact, splitting its arch pattern on `|`
    pub fn from_fact(fact: &ResolvedFact) -> Self {
        let arches = if fact.arch_pattern.is_empty() {
            Vec::new()
        } else {
            fact.arch_pattern.split('|').map(str::to_string).collect()
        };

        Self {
            name: fact.package_name.clone(),
            fixed_version: fact.fixed_version.clone(),
            arches,
        }
    }
}
