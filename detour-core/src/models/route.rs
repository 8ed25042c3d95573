use super::{BlockedSet, NodeId};

/// Specifies which routing tier produced the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The initial deterministic route does not touch any blocked node.
    Direct,
    /// The suffix was taken from precomputed alternate paths.
    FallbackCache,
    /// The suffix was found by a shortest path search on the pruned graph.
    PrunedSearch,
    /// The suffix was found by the ant colony optimization.
    AntColony,
    /// No reroute was found, the route stops at the last safe node before the blockage.
    Degraded,
}

/// A routing result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Ordered node ids. Empty only when the source node itself is blocked.
    pub path: Vec<NodeId>,
    /// The tier which produced the route.
    pub resolution: Resolution,
    /// Blocked nodes used for the request, in ascending order.
    pub blocked: Vec<NodeId>,
}

impl Route {
    /// Creates a new instance of `Route`.
    pub fn new(path: Vec<NodeId>, resolution: Resolution, blocked: &BlockedSet) -> Self {
        let mut blocked = blocked.iter().copied().collect::<Vec<_>>();
        blocked.sort_unstable();

        Self { path, resolution, blocked }
    }

    /// Returns true if the route is not a degraded partial path.
    pub fn is_complete(&self) -> bool {
        self.resolution != Resolution::Degraded
    }

    /// Returns true if the route ends at the given node.
    pub fn reaches(&self, target: NodeId) -> bool {
        self.path.last() == Some(&target)
    }
}
