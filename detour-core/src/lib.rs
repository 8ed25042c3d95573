//! This crate implements a blockage-aware router for road networks. It resolves a route between two
//! nodes with a tiered fallback cascade: a fast deterministic search, precomputed alternate paths,
//! a shortest path search on a pruned graph and, as a last resort, an ant colony optimization which
//! learns and persists edge desirability between runs.
//!
//! The graph itself is supplied by the caller through [`models::RoadNetwork`], the router never
//! mutates it.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
#[allow(missing_docs)]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
#[allow(missing_docs)]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
#[allow(missing_docs)]
pub mod discovery;

pub mod aco;
pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod scoring;
pub mod search;
pub mod storage;
pub mod utils;
