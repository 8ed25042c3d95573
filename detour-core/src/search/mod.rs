//! This module contains deterministic graph searches.

mod astar;
pub use self::astar::astar_path;

mod dijkstra;
pub use self::dijkstra::shortest_path;

mod router;
pub use self::router::DeterministicRouter;

mod simple_paths;
pub use self::simple_paths::all_simple_paths;

use crate::models::NodeId;
use crate::utils::{compare_floats, Float};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A priority queue entry: the smallest cost comes first, ties are broken by ascending node id.
#[derive(Clone, Copy, Debug)]
struct QueueItem {
    cost: Float,
    node: NodeId,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // NOTE reversed as BinaryHeap is a max-heap
        compare_floats(other.cost, self.cost).then_with(|| other.node.cmp(&self.node))
    }
}

/// Walks predecessors back from target.
fn reconstruct_path(predecessors: &FxHashMap<NodeId, NodeId>, source: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }

    path.reverse();

    path
}
