use crate::domain::function::Function;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A "caller invokes callee" edge. Duplicate call sites collapse into one
/// graph edge; `call_sites` keeps the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEdge {
    pub call_sites: u32,
}

/// Call Graph - the core data structure
pub struct CallGraph {
    /// The directed graph of functions and call edges
    pub graph: DiGraph<Function, CallEdge>,

    /// Mapping from function name to node index
    pub name_to_node: HashMap<String, NodeIndex>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
        }
    }

    pub fn add_function(&mut self, function: Function) -> NodeIndex {
        let name = function.name.clone();
        let idx = self.graph.add_node(function);
        self.name_to_node.insert(name, idx);
        idx
    }

    /// Record a call from `caller` to `callee`. Self-edges are valid and
    /// significant; repeated call sites only bump the counter.
    pub fn add_call(&mut self, caller: NodeIndex, callee: NodeIndex) {
        if let Some(edge) = self.graph.find_edge(caller, callee) {
            self.graph[edge].call_sites += 1;
        } else {
            self.graph.add_edge(caller, callee, CallEdge { call_sites: 1 });
        }
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    pub fn function(&self, idx: NodeIndex) -> &Function {
        &self.graph[idx]
    }

    pub fn has_self_call(&self, idx: NodeIndex) -> bool {
        self.graph.find_edge(idx, idx).is_some()
    }

    /// Outgoing callees of a node.
    pub fn callees(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
    }
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}
