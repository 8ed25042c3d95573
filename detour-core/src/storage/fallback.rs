#[cfg(test)]
#[path = "../../tests/unit/storage/fallback_test.rs"]
mod fallback_test;

use super::{KeyValueStore, StoreKey};
use crate::models::{BlockedSet, NodeId, PrunedGraph, RoadNetwork};
use crate::scoring::PathScorer;
use crate::search::all_simple_paths;
use crate::utils::{compare_floats, GenericError, GenericResult, RouteResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default amount of alternate paths kept per pair.
pub const DEFAULT_FALLBACK_SIZE: usize = 3;

/// Default maximum amount of edges in an enumerated path.
pub const DEFAULT_FALLBACK_CUTOFF: usize = 20;

/// Precomputes and keeps ranked alternate paths per (source, target) pair.
///
/// Entries are immutable and never re-validated: a node blocked after precomputation can still
/// appear in cached paths, the caller has to filter them out.
pub struct FallbackCache {
    store: Arc<dyn KeyValueStore>,
    scorer: PathScorer,
    cutoff: usize,
}

#[derive(Serialize, Deserialize)]
struct FallbackRecord {
    source: NodeId,
    target: NodeId,
    excluded: Vec<NodeId>,
    paths: Vec<Vec<NodeId>>,
}

impl FallbackCache {
    /// Creates a new instance of `FallbackCache`.
    pub fn new(store: Arc<dyn KeyValueStore>, scorer: PathScorer, cutoff: usize) -> Self {
        Self { store, scorer, cutoff }
    }

    /// Enumerates simple paths avoiding blocked nodes, keeps `k` cheapest ones and persists them.
    /// Returns the persisted paths, cheapest first.
    pub fn precompute<G: RoadNetwork + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
        k: usize,
        blocked: &BlockedSet,
    ) -> RouteResult<Vec<Vec<NodeId>>> {
        let pruned = PrunedGraph::new(graph, blocked);

        let mut ranked = all_simple_paths(&pruned, source, target, self.cutoff)
            .into_iter()
            .map(|path| self.scorer.score(graph, path.as_slice()).map(|cost| (cost, path)))
            .collect::<RouteResult<Vec<_>>>()?;

        // stable sort keeps enumeration order for equal costs
        ranked.sort_by(|(a, _), (b, _)| compare_floats(*a, *b));
        ranked.truncate(k);

        let paths = ranked.into_iter().map(|(_, path)| path).collect::<Vec<_>>();

        let mut excluded = blocked.iter().copied().collect::<Vec<_>>();
        excluded.sort_unstable();

        let record = FallbackRecord { source, target, excluded, paths };
        let payload = serde_json::to_vec(&record).map_err(GenericError::from)?;
        self.store.save(&StoreKey::fallback(source, target), payload.as_slice())?;

        Ok(record.paths)
    }

    /// Returns cached paths in their stored order or an empty list when nothing is cached.
    pub fn lookup(&self, source: NodeId, target: NodeId) -> GenericResult<Vec<Vec<NodeId>>> {
        let Some(payload) = self.store.load(&StoreKey::fallback(source, target))? else {
            return Ok(vec![]);
        };

        let record: FallbackRecord = serde_json::from_slice(payload.as_slice())?;

        Ok(record.paths)
    }
}
