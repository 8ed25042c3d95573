#[cfg(test)]
#[path = "../../tests/unit/routing/controller_test.rs"]
mod controller_test;

use super::RoutingConfig;
use crate::aco::AntColony;
use crate::models::{BlockedSet, NodeId, PrunedGraph, Resolution, RoadNetwork, Route};
use crate::scoring::PathScorer;
use crate::search::DeterministicRouter;
use crate::storage::{FallbackCache, KeyValueStore, PheromoneStore};
use crate::utils::{compare_floats, Environment, GenericResult, RouteError, RouteResult};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Resolves a route which avoids blocked nodes using a cascade of tiers:
///
/// 1. a deterministic route on the full graph, returned as is when it touches no blocked node;
/// 2. otherwise, the route is cut before the first blocked node and a suffix from the last safe node
///    is searched on the graph with all blocked nodes removed: cached alternates first, then
///    Dijkstra, then the ant colony;
/// 3. when every tier fails, the safe prefix alone is returned as a degraded route.
///
/// Only [`RouteError::Unreachable`] and [`RouteError::MissingAttribute`] are returned as errors.
pub struct HybridRouter {
    config: RoutingConfig,
    scorer: PathScorer,
    router: DeterministicRouter,
    fallbacks: FallbackCache,
    pheromones: PheromoneStore,
    environment: Arc<Environment>,
}

impl HybridRouter {
    /// Creates a new instance of `HybridRouter`. Fallback paths and pheromone maps are kept in the
    /// given store.
    pub fn new(
        config: RoutingConfig,
        store: Arc<dyn KeyValueStore>,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        config.validate()?;

        let scorer = PathScorer::new(config.scoring);

        Ok(Self {
            router: DeterministicRouter::new(config.search.max_expansions),
            fallbacks: FallbackCache::new(store.clone(), scorer.clone(), config.fallback.cutoff),
            pheromones: PheromoneStore::new(store),
            scorer,
            config,
            environment,
        })
    }

    /// Precomputes and persists up to `k` cheapest alternate paths for the pair, where `k` comes
    /// from the fallback config. Returns persisted paths.
    pub fn precompute_fallbacks<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        blocked: &BlockedSet,
    ) -> RouteResult<Vec<Vec<NodeId>>> {
        self.fallbacks.precompute(graph, source, target, self.config.fallback.k, blocked)
    }

    /// Finds a route from source to target avoiding blocked nodes.
    ///
    /// A degraded result is a success: check [`Route::is_complete`] to know whether the target was reached.
    pub fn route<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        blocked: &BlockedSet,
    ) -> RouteResult<Route> {
        let candidate = self.router.route(graph, source, target)?;

        let Some(index) = candidate.iter().position(|node| blocked.contains(node)) else {
            return Ok(Route::new(candidate, Resolution::Direct, blocked));
        };

        let prefix = &candidate[..index];
        let reroute_source = prefix.last().copied().unwrap_or(source);
        self.log(&format!("blockage at node {}, rerouting from {reroute_source} to {target}", candidate[index]));

        let pruned = PrunedGraph::new(graph, blocked);
        let tiers = [
            (Resolution::FallbackCache, self.config.tiers.fallback_cache),
            (Resolution::PrunedSearch, self.config.tiers.pruned_search),
            (Resolution::AntColony, self.config.tiers.ant_colony),
        ];

        for (resolution, _) in tiers.into_iter().filter(|(_, is_enabled)| *is_enabled) {
            let suffix = match resolution {
                Resolution::FallbackCache => self.resolve_with_fallbacks(graph, reroute_source, target, blocked),
                Resolution::PrunedSearch => self.resolve_with_search(&pruned, reroute_source, target),
                Resolution::AntColony => self.resolve_with_colony(&pruned, reroute_source, target),
                Resolution::Direct | Resolution::Degraded => continue,
            };

            match suffix {
                Ok(suffix) => {
                    let path = splice(prefix, suffix.as_slice());

                    if path.iter().any(|node| blocked.contains(node)) {
                        self.log(&format!("{resolution:?} produced a path through a blocked node, skipping"));
                        continue;
                    }

                    self.log(&format!("rerouted using {resolution:?}"));
                    return Ok(Route::new(path, resolution, blocked));
                }
                Err(err) if err.is_recoverable() => self.log(&format!("{resolution:?} failed: {err}")),
                Err(err) => return Err(err),
            }
        }

        self.log("all reroutes failed, returning partial path");

        Ok(Route::new(prefix.to_vec(), Resolution::Degraded, blocked))
    }

    fn resolve_with_fallbacks<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        blocked: &BlockedSet,
    ) -> RouteResult<Vec<NodeId>> {
        let candidates = self
            .fallbacks
            .lookup(source, target)?
            .into_iter()
            .filter(|path| path.first() == Some(&source) && path.last() == Some(&target))
            .filter(|path| !path.iter().any(|node| blocked.contains(node)))
            .map(|path| self.scorer.score(graph, path.as_slice()).map(|cost| (cost, path)))
            .collect::<RouteResult<Vec<_>>>()?;

        candidates
            .into_iter()
            .min_by(|(a, _), (b, _)| compare_floats(*a, *b))
            .map(|(_, path)| path)
            .ok_or(RouteError::CacheMiss { from: source, to: target })
    }

    fn resolve_with_search<G: RoadNetwork + ?Sized>(
        &self,
        pruned: &G,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Vec<NodeId>> {
        self.router.shortest(pruned, source, target).map_err(|err| match err {
            RouteError::Unreachable { from, to } => {
                RouteError::SearchExhausted(format!("no path from {from} to {to} on pruned graph"))
            }
            err => err,
        })
    }

    fn resolve_with_colony<G: RoadNetwork + ?Sized>(
        &self,
        pruned: &G,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Vec<NodeId>> {
        let colony = AntColony::new(self.config.ant_colony.clone(), self.scorer.clone(), self.environment.clone());

        colony
            .run(pruned, source, target, &self.pheromones)?
            .ok_or(RouteError::NoAntReachedTarget { from: source, to: target })
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

/// Joins prefix with a suffix starting at the prefix's last node. Loops created when the suffix
/// revisits prefix nodes are cut out, so the result stays a simple path.
fn splice(prefix: &[NodeId], suffix: &[NodeId]) -> Vec<NodeId> {
    // the junction node is already the last node of a non-empty prefix
    let joined = prefix.iter().chain(suffix.iter().skip(usize::from(!prefix.is_empty())));

    let mut path: Vec<NodeId> = Vec::with_capacity(prefix.len() + suffix.len());
    let mut positions: FxHashMap<NodeId, usize> = FxHashMap::default();

    for &node in joined {
        if let Some(&position) = positions.get(&node) {
            path.drain(position + 1..).for_each(|removed| {
                positions.remove(&removed);
            });
            continue;
        }

        positions.insert(node, path.len());
        path.push(node);
    }

    path
}
