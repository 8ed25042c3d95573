#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::utils::{Float, GenericError, GenericResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};

/// A node identifier as used by the graph provider.
pub type NodeId = u64;

/// A set of nodes which are impassable during a routing request.
pub type BlockedSet = FxHashSet<NodeId>;

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lon: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }
}

/// An undirected edge key: the unordered pair of its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// Creates a new key, the order of endpoints does not matter.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Returns endpoints with the smaller id first.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }

    /// Returns true if the edge touches the given node.
    pub fn touches(&self, node: NodeId) -> bool {
        self.0 == node || self.1 == node
    }
}

/// Specifies the read-only view on a road network the router works with.
///
/// Every implementation exposes the undirected view of the network: if `b` is a neighbor of `a`
/// then `a` is a neighbor of `b`. Neighbors and nodes are expected to be iterated in ascending id
/// order, searches rely on that to break ties deterministically.
pub trait RoadNetwork {
    /// Returns true if the node is part of the network.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns distinct neighbors of the node.
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns the node's coordinate.
    fn coordinate(&self, node: NodeId) -> Option<Coordinate>;

    /// Returns the node's blockage risk in [0, 1].
    fn risk(&self, node: NodeId) -> Option<Float>;

    /// Returns congestion level of an edge between two nodes.
    fn congestion(&self, from: NodeId, to: NodeId) -> Option<u32>;

    /// Returns all nodes.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns all undirected edges, parallel edges are reported once.
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeKey> + '_>;
}

/// A road network node with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Node id.
    pub id: NodeId,
    /// Node location.
    pub coordinate: Coordinate,
    /// Blockage risk in [0, 1], if known.
    pub risk: Option<Float>,
}

impl Node {
    /// Creates a node without a risk attribute.
    pub fn new(id: NodeId, lat: Float, lon: Float) -> Self {
        Self { id, coordinate: Coordinate::new(lat, lon), risk: None }
    }

    /// Sets blockage risk.
    pub fn with_risk(self, risk: Float) -> Self {
        Self { risk: Some(risk), ..self }
    }
}

/// A road network edge attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Edge {
    /// Congestion level, e.g. 1 to 10.
    pub congestion: Option<u32>,
}

impl Edge {
    /// Creates an edge with given congestion level.
    pub fn with_congestion(congestion: u32) -> Self {
        Self { congestion: Some(congestion) }
    }
}

/// An in-memory undirected multigraph.
///
/// Parallel edges are kept in insertion order and the first one defines edge attributes.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edges: FxHashMap<EdgeKey, Vec<Edge>>,
}

impl RoadGraph {
    /// Adds a node, an existing node with the same id is replaced.
    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.adjacency.entry(node.id).or_default();
        self.nodes.insert(node.id, node);

        self
    }

    /// Adds an edge between two existing nodes. Self loops are stored, but never reported as
    /// neighborhood as no simple path can use them.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, edge: Edge) -> GenericResult<&mut Self> {
        if let Some(missing) = [from, to].into_iter().find(|node| !self.nodes.contains_key(node)) {
            return Err(GenericError::from(format!("cannot add edge ({from}, {to}): unknown node {missing}")));
        }

        if from != to {
            self.adjacency.entry(from).or_default().insert(to);
            self.adjacency.entry(to).or_default().insert(from);
        }

        self.edges.entry(EdgeKey::new(from, to)).or_default().push(edge);

        Ok(self)
    }

    /// Returns node by its id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns all parallel edges between two nodes.
    pub fn parallel_edges(&self, from: NodeId, to: NodeId) -> &[Edge] {
        self.edges.get(&EdgeKey::new(from, to)).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl RoadNetwork for RoadGraph {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match self.adjacency.get(&node) {
            Some(neighbors) => Box::new(neighbors.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn coordinate(&self, node: NodeId) -> Option<Coordinate> {
        self.nodes.get(&node).map(|node| node.coordinate)
    }

    fn risk(&self, node: NodeId) -> Option<Float> {
        self.nodes.get(&node).and_then(|node| node.risk)
    }

    fn congestion(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.parallel_edges(from, to).first().and_then(|edge| edge.congestion)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeKey> + '_> {
        Box::new(
            self.adjacency
                .iter()
                .flat_map(|(&from, neighbors)| neighbors.range(from..).map(move |&to| EdgeKey::new(from, to))),
        )
    }
}
