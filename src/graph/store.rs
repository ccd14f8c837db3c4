//! In-memory graph storage and the batch merge engine
//!
//! The store folds adjacency-style reports into a persistent node/link set:
//! - nodes are unique by display name and are never removed
//! - each source keeps at most one outgoing link; a fresh report for a
//!   source replaces whatever that source pointed at before

use super::types::{Batch, Graph, Link, Node, NodeName};
use indexmap::IndexMap;

/// In-memory topology graph
///
/// Nodes live in an insertion-ordered map keyed by display name, so
/// snapshots list them in first-seen order. Links are a flat list with a
/// linear dedup scan; the graphs this serves are small overlay rings, not
/// bulk datasets.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Node storage, keyed by display name (first-seen order)
    nodes: IndexMap<NodeName, Node>,

    /// Current links, at most one per source
    links: Vec<Link>,

    /// Optional display truncation applied when deriving identities
    name_limit: Option<usize>,
}

impl GraphStore {
    /// Create a new empty graph store using full keys as identities
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            links: Vec::new(),
            name_limit: None,
        }
    }

    /// Create a store that truncates identities to `limit` characters
    pub fn with_name_limit(limit: usize) -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            links: Vec::new(),
            name_limit: Some(limit),
        }
    }

    /// Fold a batch of reports into the graph
    ///
    /// For every source key: make sure its node exists, then walk its
    /// sub-entries in payload order. Each non-empty value names a target
    /// node (created on first sight) and replaces the source's outgoing
    /// link, so the last non-empty value of the batch wins for that source.
    /// Empty values change nothing.
    pub fn merge(&mut self, batch: &Batch) {
        for (raw_source, neighbors) in batch {
            let source = self.derive(raw_source);
            self.ensure_node(&source);

            for raw_target in neighbors.values() {
                let target = self.derive(raw_target);
                if target.is_empty() {
                    continue;
                }
                self.ensure_node(&target);

                // This source is getting a fresh edge set
                self.links.retain(|link| !link.starts_from(&source));

                let link = Link::new(source.clone(), target);
                if !self.links.contains(&link) {
                    self.links.push(link);
                }
            }
        }
    }

    /// Return a consistent owned view of the whole graph
    pub fn snapshot(&self) -> Graph {
        Graph {
            nodes: self.nodes.values().cloned().collect(),
            links: self.links.clone(),
        }
    }

    /// Current outgoing link of a node, if any
    pub fn outgoing(&self, name: &NodeName) -> Option<&Link> {
        self.links.iter().find(|link| link.starts_from(name))
    }

    /// Check whether a node with this name exists
    pub fn has_node(&self, name: &NodeName) -> bool {
        self.nodes.contains_key(name)
    }

    /// Get number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn derive(&self, raw: &str) -> NodeName {
        NodeName::derive(raw, self.name_limit)
    }

    // Existing nodes are reused untouched; nothing is ever merged onto them.
    fn ensure_node(&mut self, name: &NodeName) {
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.clone(), Node::new(name.clone()));
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
