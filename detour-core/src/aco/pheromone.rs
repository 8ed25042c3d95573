#[cfg(test)]
#[path = "../../tests/unit/aco/pheromone_test.rs"]
mod pheromone_test;

use crate::models::{EdgeKey, NodeId, RoadNetwork};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// A learned edge desirability for one (source, target) pair.
///
/// Keys are undirected, so the weight is shared regardless of traversal direction. All weights are
/// kept non-negative.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PheromoneMap {
    weights: FxHashMap<EdgeKey, Float>,
}

impl PheromoneMap {
    /// Creates a map with the same weight on every edge of the graph.
    pub fn uniform<G: RoadNetwork + ?Sized>(graph: &G, weight: Float) -> Self {
        graph.edges().map(|edge| (edge, weight)).collect()
    }

    /// Returns weight of an edge between two nodes.
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<Float> {
        self.weights.get(&EdgeKey::new(a, b)).copied()
    }

    /// Multiplies every weight by `1 - decay`. Decay is clamped to [0, 1], so weights never become negative.
    pub fn evaporate(&mut self, decay: Float) {
        let retained = 1. - decay.clamp(0., 1.);

        self.weights.values_mut().for_each(|weight| *weight = (*weight * retained).max(0.));
    }

    /// Adds amount to every edge traversed by the path. Edges unknown to the map start from zero.
    pub fn deposit(&mut self, path: &[NodeId], amount: Float) {
        let amount = amount.max(0.);

        path.windows(2).for_each(|leg| {
            *self.weights.entry(EdgeKey::new(leg[0], leg[1])).or_insert(0.) += amount;
        });
    }

    /// Returns an iterator over edge weights.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, Float)> + '_ {
        self.weights.iter().map(|(edge, weight)| (*edge, *weight))
    }

    /// Returns amount of edges in the map.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the map has no edges.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(EdgeKey, Float)> for PheromoneMap {
    fn from_iter<T: IntoIterator<Item = (EdgeKey, Float)>>(iter: T) -> Self {
        Self { weights: iter.into_iter().map(|(edge, weight)| (edge, weight.max(0.))).collect() }
    }
}
