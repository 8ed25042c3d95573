use crate::models::NodeId;
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies failures which can happen while a route is resolved.
///
/// Only [`RouteError::Unreachable`] and [`RouteError::MissingAttribute`] escape the hybrid router,
/// the rest are absorbed by its fallback cascade.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No path exists between two nodes even when blockage is ignored.
    #[error("node {to} is unreachable from node {from}")]
    Unreachable {
        /// A start node.
        from: NodeId,
        /// A destination node.
        to: NodeId,
    },

    /// The graph lacks a required node or edge attribute.
    #[error("missing attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Attribute name.
        attribute: &'static str,
        /// A human readable description of the graph element.
        element: String,
    },

    /// A search could not produce a path within its limits.
    #[error("search exhausted: {0}")]
    SearchExhausted(String),

    /// No cached fallback path exists for the pair.
    #[error("no cached fallback paths from {from} to {to}")]
    CacheMiss {
        /// A start node.
        from: NodeId,
        /// A destination node.
        to: NodeId,
    },

    /// No ant reached the target during optimization.
    #[error("no ant reached node {to} from node {from}")]
    NoAntReachedTarget {
        /// A start node.
        from: NodeId,
        /// A destination node.
        to: NodeId,
    },

    /// A persisted store could not be read or written.
    #[error("storage failure: {0}")]
    Storage(#[from] GenericError),
}

/// A type alias for result type with `RouteError`.
pub type RouteResult<T> = Result<T, RouteError>;

impl RouteError {
    /// Creates a missing node attribute error.
    pub fn missing_node_attribute(attribute: &'static str, node: NodeId) -> Self {
        Self::MissingAttribute { attribute, element: format!("node {node}") }
    }

    /// Creates a missing edge attribute error.
    pub fn missing_edge_attribute(attribute: &'static str, from: NodeId, to: NodeId) -> Self {
        Self::MissingAttribute { attribute, element: format!("edge ({from}, {to})") }
    }

    /// Returns true if the error is a tier failure which a fallback cascade can recover from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SearchExhausted(_) | Self::CacheMiss { .. } | Self::NoAntReachedTarget { .. } | Self::Storage(_)
        )
    }
}
