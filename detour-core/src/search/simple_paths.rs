#[cfg(test)]
#[path = "../../tests/unit/search/simple_paths_test.rs"]
mod simple_paths_test;

use crate::models::{NodeId, RoadNetwork};
use rustc_hash::FxHashSet;

/// Enumerates all simple paths from source to target having at most `cutoff` edges.
///
/// The enumeration is depth first with neighbors visited in ascending id order, so the output
/// order is deterministic. Its cost is combinatorial in dense graphs, `cutoff` keeps it bounded.
pub fn all_simple_paths<G: RoadNetwork + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    cutoff: usize,
) -> Vec<Vec<NodeId>> {
    if !graph.contains(source) || !graph.contains(target) {
        return vec![];
    }

    if source == target {
        return vec![vec![source]];
    }

    if cutoff == 0 {
        return vec![];
    }

    let mut paths = Vec::new();
    let mut path = vec![source];
    let mut visited: FxHashSet<NodeId> = FxHashSet::from_iter([source]);
    let mut stack = vec![graph.neighbors(source).collect::<Vec<_>>().into_iter()];

    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some(child) if visited.contains(&child) => {}
            Some(child) if child == target => {
                let mut found = path.clone();
                found.push(child);
                paths.push(found);
            }
            Some(child) if path.len() < cutoff => {
                path.push(child);
                visited.insert(child);
                stack.push(graph.neighbors(child).collect::<Vec<_>>().into_iter());
            }
            Some(_) => {}
            None => {
                stack.pop();
                if let Some(node) = path.pop() {
                    visited.remove(&node);
                }
            }
        }
    }

    paths
}
