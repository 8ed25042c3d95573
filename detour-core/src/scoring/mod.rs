//! This module contains the path scoring function which blends distance, blockage risk and
//! congestion into a single cost.

#[cfg(test)]
#[path = "../../tests/unit/scoring/scorer_test.rs"]
mod scorer_test;

use crate::algorithms::geo::node_distance;
use crate::models::{NodeId, RoadNetwork};
use crate::utils::{Float, RouteError, RouteResult};
use serde::Deserialize;

/// Weights of the cost components.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreWeights {
    /// A weight of total geodesic distance in meters.
    pub distance: Float,
    /// A weight of total blockage risk.
    pub risk: Float,
    /// A weight of total congestion.
    pub congestion: Float,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { distance: 1., risk: 2., congestion: 3. }
    }
}

/// Scores paths as `distance * Σd + risk * Σ(r(u) + r(v)) / 2 + congestion * Σc(u, v)` over
/// consecutive node pairs.
#[derive(Clone, Debug, Default)]
pub struct PathScorer {
    weights: ScoreWeights,
}

impl PathScorer {
    /// Creates a new instance of `PathScorer`.
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Returns scorer weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Calculates path cost. A path with less than two nodes costs nothing.
    /// Fails when the graph lacks coordinate, risk or congestion data for any visited element.
    pub fn score<G: RoadNetwork + ?Sized>(&self, graph: &G, path: &[NodeId]) -> RouteResult<Float> {
        let mut totals: (Float, Float, Float) = (0., 0., 0.);

        for leg in path.windows(2) {
            let (u, v) = (leg[0], leg[1]);

            let congestion =
                graph.congestion(u, v).ok_or_else(|| RouteError::missing_edge_attribute("congestion", u, v))?;

            totals.0 += node_distance(graph, u, v)?;
            totals.1 += (node_risk(graph, u)? + node_risk(graph, v)?) / 2.;
            totals.2 += congestion as Float;
        }

        let (distance, risk, congestion) = totals;

        Ok(self.weights.distance * distance + self.weights.risk * risk + self.weights.congestion * congestion)
    }
}

fn node_risk<G: RoadNetwork + ?Sized>(graph: &G, node: NodeId) -> RouteResult<Float> {
    graph.risk(node).ok_or_else(|| RouteError::missing_node_attribute("blockage_risk", node))
}
