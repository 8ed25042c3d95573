//! This module contains an ant colony optimization which samples paths guided by learned
//! pheromone and reinforces the cheapest ones.

mod colony;
pub use self::colony::*;

mod pheromone;
pub use self::pheromone::PheromoneMap;
