//! Core type definitions for the topology graph

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display identity of a node
///
/// The identity is the raw key a peer reported itself (or a neighbor)
/// under, optionally truncated to a configured prefix length. Two reports
/// that derive the same name refer to the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(name: impl Into<String>) -> Self {
        NodeName(name.into())
    }

    /// Derive a name from a raw submitted key, applying the optional
    /// display truncation. Truncation counts characters, not bytes.
    pub fn derive(raw: &str, limit: Option<usize>) -> Self {
        match limit {
            Some(limit) => NodeName(raw.chars().take(limit).collect()),
            None => NodeName(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        NodeName(s)
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        NodeName(s.to_string())
    }
}

/// A vertex in the topology graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Display name, unique across the graph
    pub name: NodeName,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Node { name: name.into() }
    }
}

/// A directed edge between two nodes, addressed by name
///
/// The graph keeps at most one link per distinct `source`: a peer has one
/// current successor, and a fresh report replaces whatever was known before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Node the edge goes FROM
    pub source: NodeName,

    /// Node the edge goes TO
    pub target: NodeName,
}

impl Link {
    pub fn new(source: impl Into<NodeName>, target: impl Into<NodeName>) -> Self {
        Link {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Check if this link goes FROM a specific node
    pub fn starts_from(&self, name: &NodeName) -> bool {
        self.source == *name
    }
}

/// One write request's payload: source key -> (sub-key -> target value)
///
/// Sub-keys are arbitrary labels chosen by the reporting peer ("successor",
/// "predecessor", ...); only the values name other nodes. `IndexMap`
/// preserves the payload's own iteration order.
pub type Batch = IndexMap<String, IndexMap<String, String>>;

/// Serialized view of the whole graph at one instant
///
/// This is the document the read endpoint returns and the persistence sink
/// writes: the shape force-graph frontends consume directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}
