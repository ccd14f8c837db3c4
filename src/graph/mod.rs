//! Core topology graph implementation
//!
//! This module implements the merge/dedup engine:
//! - nodes unique by display name, created on first sight, never removed
//! - directed links addressed by node name
//! - at most one outgoing link per source; merging replaces stale links

pub mod store;
pub mod types;

// Re-export main types
pub use store::GraphStore;
pub use types::{Batch, Graph, Link, Node, NodeName};
