//! Ringview Topology Aggregator
//!
//! An in-memory graph of a peer-to-peer overlay, built incrementally from
//! the neighbor tables its members report and served as JSON to a
//! force-graph visualizer.
//!
//! Peers POST batches shaped as `{source: {label: target, ...}, ...}`; the
//! store folds each batch into a persistent node/link set. Nodes are unique
//! by display name and never removed. Every source keeps at most one
//! outgoing link, so a peer's latest report always replaces its stale view
//! of the ring.
//!
//! ## Example Usage
//!
//! ```rust
//! use ringview::graph::{Batch, GraphStore};
//!
//! let mut store = GraphStore::new();
//!
//! // One peer reports its successor
//! let mut batch = Batch::new();
//! batch.insert(
//!     "alice".to_string(),
//!     [("successor".to_string(), "bob".to_string())]
//!         .into_iter()
//!         .collect(),
//! );
//! store.merge(&batch);
//!
//! assert_eq!(store.node_count(), 2);
//! assert_eq!(store.link_count(), 1);
//!
//! let graph = store.snapshot();
//! assert_eq!(graph.links[0].source.as_str(), "alice");
//! assert_eq!(graph.links[0].target.as_str(), "bob");
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod http;
pub mod persistence;

// Re-export main types for convenience
pub use graph::{Batch, Graph, GraphStore, Link, Node, NodeName};
pub use http::{router, AppState, HttpServer};
pub use persistence::{FileSink, SinkError, SinkResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
