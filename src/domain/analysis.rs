use crate::domain::graph::CallGraph;
use crate::domain::paths::{CallPath, PathFinder};
use crate::domain::scc::SccPartition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default cap on recorded witness paths per recursive function. Distinct
/// simple cycles through a node can be exponential in pathological graphs;
/// the cap bounds work and output size without affecting which functions are
/// classified recursive.
pub const DEFAULT_PATH_CAP: usize = 8;

/// One finding per definition-bearing function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursionFinding {
    pub function: String,
    pub is_recursive: bool,
    /// Witness paths for recursive functions. May be empty even when
    /// `is_recursive` is true (no path recoverable, e.g. the only cycle runs
    /// through a declaration-only node).
    pub paths: Vec<CallPath>,
}

/// Recursion Analyzer - the pure core: SCC classification plus witness path
/// reconstruction over an immutable call graph.
pub struct RecursionAnalyzer {
    path_cap: usize,
}

impl RecursionAnalyzer {
    pub fn new() -> Self {
        Self {
            path_cap: DEFAULT_PATH_CAP,
        }
    }

    pub fn with_path_cap(path_cap: usize) -> Self {
        Self { path_cap }
    }

    /// Analyze the call graph and return one finding per definition-bearing
    /// function. Declaration-only functions never appear in the output.
    ///
    /// Ordering: components in Tarjan discovery order, members in graph
    /// insertion order. The set of functions flagged recursive is exact and
    /// reproducible; only path enumeration is bounded by the cap.
    pub fn analyze(&self, graph: &CallGraph) -> Vec<RecursionFinding> {
        let partition = SccPartition::decompose(graph);
        let finder = PathFinder::new(self.path_cap);
        let mut findings = Vec::new();

        for scc in &partition.components {
            let component: HashSet<_> = scc.members.iter().copied().collect();
            for &node in &scc.members {
                let function = graph.function(node);
                if !function.is_definition {
                    continue;
                }
                let paths = if scc.is_recursive {
                    finder.cycles_through(graph, node, &component)
                } else {
                    Vec::new()
                };
                findings.push(RecursionFinding {
                    function: function.name.clone(),
                    is_recursive: scc.is_recursive,
                    paths,
                });
            }
        }

        findings
    }
}

impl Default for RecursionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
