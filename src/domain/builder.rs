use crate::domain::function::Function;
use crate::domain::graph::CallGraph;
use crate::domain::summary::ModuleSummary;

/// Graph builder - Domain Service for constructing a CallGraph from a
/// ModuleSummary.
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Two-pass build strategy: pass 1 allocates nodes for every declared
    /// function, pass 2 wires call edges. A callee name without a matching
    /// function entry is materialized as a declaration-only node, so an edge
    /// into an unknown target never fails the build.
    ///
    /// Pure construction: an empty summary yields an empty graph.
    pub fn build(&self, summary: &ModuleSummary) -> CallGraph {
        let mut graph = CallGraph::new();

        // Pass 1: Node Allocation
        for function in &summary.functions {
            if graph.get_node_by_name(&function.name).is_some() {
                continue;
            }
            let id = graph.graph.node_count() as u32;
            graph.add_function(Function::new(
                id,
                function.name.clone(),
                function.is_definition,
            ));
        }

        // Pass 2: Edge Wiring
        // Callees that resolve to nothing become declaration nodes here, kept
        // as valid call targets but excluded from recursion analysis.
        for function in &summary.functions {
            let caller = match graph.get_node_by_name(&function.name) {
                Some(idx) => idx,
                None => continue,
            };
            for callee_name in &function.callees {
                let callee = match graph.get_node_by_name(callee_name) {
                    Some(idx) => idx,
                    None => {
                        let id = graph.graph.node_count() as u32;
                        graph.add_function(Function::new(id, callee_name.clone(), false))
                    }
                };
                graph.add_call(caller, callee);
            }
        }

        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
