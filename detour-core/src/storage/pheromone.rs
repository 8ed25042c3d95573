#[cfg(test)]
#[path = "../../tests/unit/storage/pheromone_test.rs"]
mod pheromone_test;

use super::{KeyValueStore, StoreKey};
use crate::aco::PheromoneMap;
use crate::models::{EdgeKey, NodeId};
use crate::utils::{Float, GenericResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Persists pheromone maps per (source, target) pair.
///
/// NOTE the payload has no schema version, changing `PheromoneRecord` makes old entries unreadable.
pub struct PheromoneStore {
    store: Arc<dyn KeyValueStore>,
}

#[derive(Serialize, Deserialize)]
struct PheromoneRecord {
    source: NodeId,
    target: NodeId,
    edges: Vec<(NodeId, NodeId, Float)>,
}

impl PheromoneStore {
    /// Creates a new instance of `PheromoneStore`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Saves the map, replacing a previous one for the same pair.
    pub fn save(&self, source: NodeId, target: NodeId, map: &PheromoneMap) -> GenericResult<()> {
        let mut edges = map
            .iter()
            .map(|(edge, weight)| {
                let (a, b) = edge.endpoints();
                (a, b, weight)
            })
            .collect::<Vec<_>>();
        edges.sort_by(|(a1, b1, _), (a2, b2, _)| (a1, b1).cmp(&(a2, b2)));

        let payload = serde_json::to_vec(&PheromoneRecord { source, target, edges })?;

        self.store.save(&StoreKey::pheromone(source, target), payload.as_slice())
    }

    /// Loads the map stored for the pair.
    pub fn load(&self, source: NodeId, target: NodeId) -> GenericResult<Option<PheromoneMap>> {
        let Some(payload) = self.store.load(&StoreKey::pheromone(source, target))? else {
            return Ok(None);
        };

        let record: PheromoneRecord = serde_json::from_slice(payload.as_slice())?;

        Ok(Some(record.edges.into_iter().map(|(a, b, weight)| (EdgeKey::new(a, b), weight)).collect()))
    }
}
