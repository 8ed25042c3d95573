//! This module contains persistence of learned and precomputed routing data: pheromone maps and
//! ranked fallback paths, both addressed by a typed (source, target) key.

mod store;
pub use self::store::*;

mod pheromone;
pub use self::pheromone::PheromoneStore;

mod fallback;
pub use self::fallback::{FallbackCache, DEFAULT_FALLBACK_CUTOFF, DEFAULT_FALLBACK_SIZE};
