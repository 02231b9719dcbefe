use crate::advisory_generation::domain::{AffectedPackage, CriteriaNode, FactTable};

/// CriteriaEvaluator collects the packages a definition affects
///
/// Every reachable criterion contributes on its own: the walk is a union over
/// leaves, and AND/OR/NOT grouping in the feed is not evaluated. Feeds only use
/// flat "package AND version" groups today. Richer boolean structure would
/// need a real evaluator here.
pub struct CriteriaEvaluator;

impl CriteriaEvaluator {
    /// Walks the tree depth-first, emitting a node's own criteria before its children
    ///
    /// Test refs missing from `facts` are skipped: upstream pruning leaves
    /// dangling leaves in otherwise valid feeds. The walk uses an explicit
    /// stack so deep trees cannot exhaust the call stack.
    pub fn evaluate(root: &CriteriaNode, facts: &FactTable) -> Vec<AffectedPackage> {
        let mut packages = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            packages.extend(
                node.criterions
                    .iter()
                    .filter_map(|criterion| facts.get(&criterion.test_ref))
                    .map(AffectedPackage::from_fact),
            );

            // Reverse so the first child is visited next
            stack.extend(node.criterias.iter().rev());
        }

        packages
    }
}
