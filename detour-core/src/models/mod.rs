//! A collection of models to represent road network graph and routing results.

mod graph;
pub use self::graph::*;

mod pruned;
pub use self::pruned::PrunedGraph;

mod route;
pub use self::route::*;
