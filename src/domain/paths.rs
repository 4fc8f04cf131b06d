use crate::domain::graph::CallGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

/// Witness path: ordered function names starting and ending at the same
/// function, one traversal of a cycle. Length >= 2.
pub type CallPath = Vec<String>;

/// Path Reconstructor - recovers concrete cycles witnessing recursion.
///
/// Depth-first search with an explicit frame stack and an explicit on-path
/// set, so the traversal carries no captured mutable state and is re-entrant.
pub struct PathFinder {
    max_paths: usize,
}

struct Frame {
    callees: Vec<NodeIndex>,
    cursor: usize,
}

impl PathFinder {
    pub fn new(max_paths: usize) -> Self {
        Self { max_paths }
    }

    /// Enumerate simple cycles through `start`, following real call edges
    /// through definition-bearing functions only.
    ///
    /// The search stays inside `component` (the SCC containing `start`): a
    /// simple cycle through a node cannot leave that node's SCC, and
    /// declaration-only nodes are non-traversable dead ends. A cycle is
    /// recorded whenever an edge returns to `start`; the node is then skipped
    /// so no function repeats within the path body. Stops after `max_paths`
    /// recorded cycles.
    ///
    /// Callees are visited in name order, making the recovered paths
    /// deterministic for a given graph.
    pub fn cycles_through(
        &self,
        graph: &CallGraph,
        start: NodeIndex,
        component: &HashSet<NodeIndex>,
    ) -> Vec<CallPath> {
        let mut paths = Vec::new();
        if self.max_paths == 0 {
            return paths;
        }

        let mut on_path = HashSet::new();
        let mut path = Vec::new();
        let mut frames = Vec::new();

        on_path.insert(start);
        path.push(start);
        frames.push(self.frame(graph, start, component));

        while !frames.is_empty() && paths.len() < self.max_paths {
            let next = {
                let frame = match frames.last_mut() {
                    Some(frame) => frame,
                    None => break,
                };
                if frame.cursor < frame.callees.len() {
                    let n = frame.callees[frame.cursor];
                    frame.cursor += 1;
                    Some(n)
                } else {
                    None
                }
            };

            match next {
                Some(next) if next == start => {
                    let mut names: CallPath = path
                        .iter()
                        .map(|&n| graph.function(n).name.clone())
                        .collect();
                    names.push(graph.function(start).name.clone());
                    paths.push(names);
                }
                Some(next) if !on_path.contains(&next) => {
                    on_path.insert(next);
                    path.push(next);
                    frames.push(self.frame(graph, next, component));
                }
                Some(_) => {}
                None => {
                    frames.pop();
                    if let Some(done) = path.pop() {
                        on_path.remove(&done);
                    }
                }
            }
        }

        paths
    }

    fn frame(&self, graph: &CallGraph, node: NodeIndex, component: &HashSet<NodeIndex>) -> Frame {
        let mut callees: Vec<NodeIndex> = graph
            .callees(node)
            .filter(|n| component.contains(n) && graph.function(*n).is_definition)
            .collect();
        callees.sort_by(|a, b| graph.function(*a).name.cmp(&graph.function(*b).name));
        Frame { callees, cursor: 0 }
    }
}
