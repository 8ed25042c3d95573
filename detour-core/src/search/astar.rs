#[cfg(test)]
#[path = "../../tests/unit/search/astar_test.rs"]
mod astar_test;

use super::{reconstruct_path, QueueItem};
use crate::algorithms::geo::node_distance;
use crate::models::{NodeId, RoadNetwork};
use crate::utils::{Float, RouteError, RouteResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BinaryHeap;

/// Finds a path using best-first search guided by geodesic distance to the target. Edge cost is
/// a geodesic length of the edge.
///
/// When `max_expansions` is set, the search gives up with `SearchExhausted` after expanding
/// that many nodes.
pub fn astar_path<G: RoadNetwork + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    max_expansions: Option<usize>,
) -> RouteResult<Vec<NodeId>> {
    if !graph.contains(source) || !graph.contains(target) {
        return Err(RouteError::Unreachable { from: source, to: target });
    }

    let mut open = BinaryHeap::new();
    let mut g_score: FxHashMap<NodeId, Float> = FxHashMap::default();
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut closed: FxHashSet<NodeId> = FxHashSet::default();
    let mut expansions = 0_usize;

    g_score.insert(source, 0.);
    open.push(QueueItem { cost: node_distance(graph, source, target)?, node: source });

    while let Some(QueueItem { node: current, .. }) = open.pop() {
        if current == target {
            return Ok(reconstruct_path(&predecessors, source, target));
        }

        if !closed.insert(current) {
            continue;
        }

        expansions += 1;
        if let Some(limit) = max_expansions.filter(|&limit| expansions > limit) {
            return Err(RouteError::SearchExhausted(format!(
                "best-first search from {source} to {target} expanded more than {limit} nodes"
            )));
        }

        let current_g = g_score.get(&current).copied().unwrap_or(Float::INFINITY);

        for neighbor in graph.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }

            let tentative = current_g + node_distance(graph, current, neighbor)?;

            if tentative < g_score.get(&neighbor).copied().unwrap_or(Float::INFINITY) {
                g_score.insert(neighbor, tentative);
                predecessors.insert(neighbor, current);
                open.push(QueueItem { cost: tentative + node_distance(graph, neighbor, target)?, node: neighbor });
            }
        }
    }

    Err(RouteError::Unreachable { from: source, to: target })
}
