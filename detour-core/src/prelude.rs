//! This module reimports a common used types.

pub use crate::aco::{AntColony, AntColonyConfig, PheromoneMap};

pub use crate::algorithms::geo::{haversine_distance, nearest_node};

pub use crate::models::{BlockedSet, Coordinate, Edge, EdgeKey, Node, NodeId, Resolution, RoadGraph, RoadNetwork, Route};

pub use crate::routing::{read_config, HybridRouter, RoutingConfig};

pub use crate::scoring::{PathScorer, ScoreWeights};

pub use crate::storage::{FileStore, InMemoryStore, KeyValueStore};

pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger, RouteError, RouteResult};
pub use crate::utils::{DefaultRandom, Random};
