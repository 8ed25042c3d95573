#[cfg(test)]
#[path = "../../tests/unit/models/pruned_test.rs"]
mod pruned_test;

use super::*;
use crate::utils::Float;

/// A view on a road network with blocked nodes removed as vertices: blocked nodes are not part
/// of the view and no edge of the view references them.
pub struct PrunedGraph<'a, G: RoadNetwork + ?Sized> {
    inner: &'a G,
    blocked: &'a BlockedSet,
}

impl<'a, G: RoadNetwork + ?Sized> PrunedGraph<'a, G> {
    /// Creates a new instance of `PrunedGraph`.
    pub fn new(inner: &'a G, blocked: &'a BlockedSet) -> Self {
        Self { inner, blocked }
    }

    fn is_kept(&self, node: NodeId) -> bool {
        !self.blocked.contains(&node)
    }
}

impl<G: RoadNetwork + ?Sized> RoadNetwork for PrunedGraph<'_, G> {
    fn contains(&self, node: NodeId) -> bool {
        self.is_kept(node) && self.inner.contains(node)
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        if !self.is_kept(node) {
            return Box::new(std::iter::empty());
        }

        Box::new(self.inner.neighbors(node).filter(move |&neighbor| self.is_kept(neighbor)))
    }

    fn coordinate(&self, node: NodeId) -> Option<Coordinate> {
        self.is_kept(node).then(|| self.inner.coordinate(node)).flatten()
    }

    fn risk(&self, node: NodeId) -> Option<Float> {
        self.is_kept(node).then(|| self.inner.risk(node)).flatten()
    }

    fn congestion(&self, from: NodeId, to: NodeId) -> Option<u32> {
        (self.is_kept(from) && self.is_kept(to)).then(|| self.inner.congestion(from, to)).flatten()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.inner.nodes().filter(move |&node| self.is_kept(node)))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeKey> + '_> {
        Box::new(self.inner.edges().filter(move |edge| {
            let (a, b) = edge.endpoints();
            self.is_kept(a) && self.is_kept(b)
        }))
    }
}
