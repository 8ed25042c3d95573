//! Router configuration.

#[cfg(test)]
#[path = "../../tests/unit/routing/config_test.rs"]
mod config_test;

use crate::aco::AntColonyConfig;
use crate::scoring::ScoreWeights;
use crate::storage::{DEFAULT_FALLBACK_CUTOFF, DEFAULT_FALLBACK_SIZE};
use crate::utils::{GenericError, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A router configuration. Every section is optional, missing values get defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Path cost weights.
    pub scoring: ScoreWeights,
    /// Deterministic search limits.
    pub search: SearchConfig,
    /// Fallback path cache settings.
    pub fallback: FallbackConfig,
    /// Ant colony parameters.
    pub ant_colony: AntColonyConfig,
    /// Enabled reroute tiers.
    pub tiers: TierConfig,
}

/// Deterministic search settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum amount of nodes expanded by best-first search before it gives up. Unlimited if absent.
    pub max_expansions: Option<usize>,
}

/// Fallback cache settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FallbackConfig {
    /// Amount of alternate paths kept per pair.
    pub k: usize,
    /// Maximum amount of edges in an enumerated path.
    pub cutoff: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { k: DEFAULT_FALLBACK_SIZE, cutoff: DEFAULT_FALLBACK_CUTOFF }
    }
}

/// Specifies which reroute tiers are attempted after a blockage is detected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierConfig {
    /// Use precomputed alternate paths.
    pub fallback_cache: bool,
    /// Use shortest path search on the pruned graph.
    pub pruned_search: bool,
    /// Use ant colony optimization.
    pub ant_colony: bool,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self { fallback_cache: true, pruned_search: true, ant_colony: true }
    }
}

impl RoutingConfig {
    /// Checks that all parameters are in their valid ranges.
    pub fn validate(&self) -> GenericResult<()> {
        let ScoreWeights { distance, risk, congestion } = self.scoring;
        if [distance, risk, congestion].iter().any(|weight| !weight.is_finite() || *weight < 0.) {
            return Err("scoring weights must be finite and non-negative".into());
        }

        if self.fallback.k == 0 {
            return Err("fallback k must be positive".into());
        }

        if self.search.max_expansions == Some(0) {
            return Err("search maxExpansions must be positive".into());
        }

        self.ant_colony.validate()
    }
}

/// Reads and validates config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<RoutingConfig> {
    let config: RoutingConfig = serde_json::from_reader(reader)
        .map_err(|err| GenericError::from(format!("cannot deserialize config: '{err}'")))?;

    config.validate()?;

    Ok(config)
}
