use crate::domain::graph::CallGraph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

/// One strongly connected component of the call graph, tagged with the
/// recursion classification.
#[derive(Debug, Clone)]
pub struct Scc {
    /// Members in graph insertion order.
    pub members: Vec<NodeIndex>,
    pub is_recursive: bool,
}

/// Partition of the call graph into SCCs.
#[derive(Debug, Clone)]
pub struct SccPartition {
    pub components: Vec<Scc>,
}

impl SccPartition {
    /// Decompose the call graph into strongly connected components.
    ///
    /// Classification rule: an SCC is recursive if it has more than one
    /// member, or its single member carries a self-edge. The classification
    /// is deterministic and independent of edge visitation order; component
    /// order follows Tarjan discovery order as returned by
    /// `petgraph::algo::tarjan_scc`, with members sorted into graph insertion
    /// order for reproducible output.
    pub fn decompose(graph: &CallGraph) -> Self {
        let components = tarjan_scc(&graph.graph)
            .into_iter()
            .map(|mut members| {
                members.sort_unstable();
                let is_recursive =
                    members.len() > 1 || (members.len() == 1 && graph.has_self_call(members[0]));
                Scc {
                    members,
                    is_recursive,
                }
            })
            .collect();
        Self { components }
    }

    /// The component containing `node`, if any.
    pub fn component_of(&self, node: NodeIndex) -> Option<&Scc> {
        self.components.iter().find(|c| c.members.contains(&node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::GraphBuilder;
    use crate::domain::summary::{FunctionSummary, ModuleSummary};

    fn graph_of(edges: &[(&str, &str)]) -> CallGraph {
        let mut summary = ModuleSummary::new("test");
        for (caller, callee) in edges {
            match summary.functions.iter_mut().find(|f| f.name == *caller) {
                Some(f) => f.callees.push(callee.to_string()),
                None => summary.functions.push(FunctionSummary {
                    name: caller.to_string(),
                    is_definition: true,
                    callees: vec![callee.to_string()],
                }),
            }
        }
        GraphBuilder::new().build(&summary)
    }

    fn recursive_names(graph: &CallGraph) -> Vec<String> {
        let mut names: Vec<String> = SccPartition::decompose(graph)
            .components
            .iter()
            .filter(|c| c.is_recursive)
            .flat_map(|c| c.members.iter().map(|&m| graph.function(m).name.clone()))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_self_edge_singleton_is_recursive() {
        let graph = graph_of(&[("f", "f")]);
        assert_eq!(recursive_names(&graph), vec!["f"]);
    }

    #[test]
    fn test_singleton_without_self_edge_is_not_recursive() {
        let graph = graph_of(&[("a", "b")]);
        assert!(recursive_names(&graph).is_empty());
    }

    #[test]
    fn test_mutual_recursion_single_component() {
        let graph = graph_of(&[("a", "b"), ("b", "a")]);
        assert_eq!(recursive_names(&graph), vec!["a", "b"]);

        let partition = SccPartition::decompose(&graph);
        let recursive: Vec<_> = partition
            .components
            .iter()
            .filter(|c| c.is_recursive)
            .collect();
        assert_eq!(recursive.len(), 1);
        assert_eq!(recursive[0].members.len(), 2);
    }

    #[test]
    fn test_three_cycle_plus_isolated() {
        let graph = graph_of(&[("x", "y"), ("y", "z"), ("z", "x"), ("x", "w")]);
        assert_eq!(recursive_names(&graph), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_partition_covers_all_nodes() {
        let graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
        let partition = SccPartition::decompose(&graph);
        let total: usize = partition.components.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, graph.graph.node_count());
    }

    #[test]
    fn test_component_of() {
        let graph = graph_of(&[("a", "b"), ("b", "a")]);
        let a = graph.get_node_by_name("a").unwrap();
        let b = graph.get_node_by_name("b").unwrap();
        let partition = SccPartition::decompose(&graph);
        let scc = partition.component_of(a).unwrap();
        assert!(scc.members.contains(&b));
    }

    #[test]
    fn test_decomposition_is_idempotent() {
        let graph = graph_of(&[("a", "b"), ("b", "a"), ("c", "c"), ("d", "a")]);
        assert_eq!(recursive_names(&graph), recursive_names(&graph));
    }
}
