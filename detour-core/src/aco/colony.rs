#[cfg(test)]
#[path = "../../tests/unit/aco/colony_test.rs"]
mod colony_test;

use super::PheromoneMap;
use crate::algorithms::geo::node_distance;
use crate::models::{NodeId, RoadNetwork};
use crate::scoring::PathScorer;
use crate::storage::PheromoneStore;
use crate::utils::{compare_floats, Environment, Float, GenericError, GenericResult, RouteResult, Timer};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::sync::Arc;

/// Pheromone assigned to every edge when no learned map exists.
pub const INITIAL_PHEROMONE: Float = 1.;

/// Guards pheromone deposit against division by zero.
const DEPOSIT_EPSILON: Float = 1e-5;

/// Edges shorter than this (in meters) are treated as having this length when attractiveness is
/// calculated, so coincident nodes do not produce infinite weights.
const MIN_LEG_DISTANCE: Float = 1e-3;

/// Ant colony parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AntColonyConfig {
    /// Amount of ants constructing paths in one round.
    pub ants: usize,
    /// Amount of the cheapest paths of a round which deposit pheromone.
    pub best: usize,
    /// Amount of rounds.
    pub iterations: usize,
    /// Evaporation factor in [0, 1).
    pub decay: Float,
    /// Trust in accumulated pheromone.
    pub alpha: Float,
    /// Trust in raw distance.
    pub beta: Float,
    /// Maximum amount of moves of a single ant.
    pub max_steps: usize,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        Self { ants: 10, best: 3, iterations: 50, decay: 0.5, alpha: 1., beta: 2., max_steps: 100 }
    }
}

impl AntColonyConfig {
    /// Checks that parameters are in their valid ranges.
    pub fn validate(&self) -> GenericResult<()> {
        if !(0.0..1.0).contains(&self.decay) {
            return Err(GenericError::from(format!("decay must be in [0, 1), got {}", self.decay)));
        }

        if self.ants == 0 || self.iterations == 0 || self.max_steps == 0 {
            return Err("ants, iterations and maxSteps must be positive".into());
        }

        if self.alpha < 0. || self.beta < 0. {
            return Err("alpha and beta must be non-negative".into());
        }

        Ok(())
    }
}

/// A stochastic path search which learns edge desirability across runs for the same pair of nodes.
pub struct AntColony {
    config: AntColonyConfig,
    scorer: PathScorer,
    environment: Arc<Environment>,
}

impl AntColony {
    /// Creates a new instance of `AntColony`.
    pub fn new(config: AntColonyConfig, scorer: PathScorer, environment: Arc<Environment>) -> Self {
        Self { config, scorer, environment }
    }

    /// Runs optimization using the pheromone map stored for the pair (or a uniform one if there is
    /// none) and persists the updated map afterwards. Returns the cheapest path found, if any.
    pub fn run<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        store: &PheromoneStore,
    ) -> RouteResult<Option<Vec<NodeId>>> {
        let pheromones = match store.load(source, target)? {
            Some(pheromones) => {
                self.log(&format!("loaded pheromone map for {source}->{target}: {} edges", pheromones.len()));
                pheromones
            }
            None => {
                self.log(&format!("initialized pheromone map for {source}->{target}"));
                PheromoneMap::uniform(graph, INITIAL_PHEROMONE)
            }
        };

        let (best, pheromones) = Timer::measure_duration_with_callback(
            || self.optimize(graph, source, target, pheromones),
            |duration| self.log(&format!("ant colony finished in {}ms", duration.as_millis())),
        )?;

        store.save(source, target, &pheromones)?;
        self.log(&format!("saved pheromone map for {source}->{target}"));

        Ok(best)
    }

    /// Runs all rounds on the given pheromone map and hands the updated map back together with the
    /// cheapest path seen in any round.
    pub fn optimize<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        mut pheromones: PheromoneMap,
    ) -> RouteResult<(Option<Vec<NodeId>>, PheromoneMap)> {
        let mut best: Option<(Float, Vec<NodeId>)> = None;

        for _ in 0..self.config.iterations {
            let mut candidates = Vec::with_capacity(self.config.ants);

            for _ in 0..self.config.ants {
                if let Some(path) = self.construct_path(graph, source, target, &pheromones)? {
                    candidates.push((self.scorer.score(graph, path.as_slice())?, path));
                }
            }

            pheromones.evaporate(self.config.decay);

            candidates.sort_by(|(a, _), (b, _)| compare_floats(*a, *b));
            candidates.iter().take(self.config.best).for_each(|(cost, path)| {
                pheromones.deposit(path.as_slice(), 1. / (cost + DEPOSIT_EPSILON));
            });

            if let Some((cost, path)) = candidates.into_iter().next() {
                if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                    best = Some((cost, path));
                }
            }
        }

        Ok((best.map(|(_, path)| path), pheromones))
    }

    /// Lets a single ant walk from source. Returns `None` when the ant is stuck in a dead end or runs
    /// out of steps: a failed sample, not an error.
    fn construct_path<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        pheromones: &PheromoneMap,
    ) -> RouteResult<Option<Vec<NodeId>>> {
        if source == target {
            return Ok(Some(vec![source]));
        }

        let mut path = vec![source];
        let mut visited = FxHashSet::from_iter([source]);
        let mut current = source;

        for _ in 0..self.config.max_steps {
            let mut neighbors = Vec::new();
            let mut weights = Vec::new();

            for neighbor in graph.neighbors(current).filter(|neighbor| !visited.contains(neighbor)) {
                let distance = node_distance(graph, current, neighbor)?.max(MIN_LEG_DISTANCE);
                let pheromone = pheromones.get(current, neighbor).unwrap_or(INITIAL_PHEROMONE);

                neighbors.push(neighbor);
                weights.push(pheromone.powf(self.config.alpha) * (1. / distance).powf(self.config.beta));
            }

            let Some(index) = self.environment.random.weighted(weights.as_slice()) else {
                return Ok(None);
            };

            current = neighbors[index];
            path.push(current);
            visited.insert(current);

            if current == target {
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}
