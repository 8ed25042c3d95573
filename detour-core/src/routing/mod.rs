//! This module contains the hybrid router which combines all routing tiers into one blockage aware
//! routing decision.

mod config;
pub use self::config::*;

mod controller;
pub use self::controller::HybridRouter;
