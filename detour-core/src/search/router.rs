#[cfg(test)]
#[path = "../../tests/unit/search/router_test.rs"]
mod router_test;

use super::{astar_path, shortest_path};
use crate::models::{NodeId, RoadNetwork};
use crate::utils::{RouteError, RouteResult};

/// A fast deterministic router: best-first search first, Dijkstra when it fails.
///
/// The best-first heuristic is a lower bound on pure distance only, not on a blended path cost,
/// so the route is a quick first guess rather than the cheapest one.
#[derive(Clone, Debug, Default)]
pub struct DeterministicRouter {
    max_expansions: Option<usize>,
}

impl DeterministicRouter {
    /// Creates a new instance of `DeterministicRouter` with the best-first search limited by the
    /// amount of expanded nodes.
    pub fn new(max_expansions: Option<usize>) -> Self {
        Self { max_expansions }
    }

    /// Finds a route on the undirected view of the graph.
    pub fn route<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Vec<NodeId>> {
        match astar_path(graph, source, target, self.max_expansions) {
            Ok(path) => Ok(path),
            Err(RouteError::SearchExhausted(_) | RouteError::Unreachable { .. }) => {
                self.shortest(graph, source, target)
            }
            Err(err) => Err(err),
        }
    }

    /// Finds the shortest path by geodesic length, without the heuristic stage.
    pub fn shortest<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Vec<NodeId>> {
        shortest_path(graph, source, target)
    }
}
