//! Persistence for the aggregator
//!
//! The graph lives in memory for the process lifetime; this module only
//! mirrors it to a JSON file as a convenience, so a visualizer (or a
//! restarted operator) can pick up the last merged state from disk.

use crate::graph::Graph;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while flushing the graph to disk
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// File mirror of the in-memory graph
///
/// Flushed after every accepted write, the file holds the same document the
/// read endpoint would have served at that moment.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the graph to the configured path, replacing previous contents
    pub fn flush(&self, graph: &Graph) -> SinkResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, graph)?;
        Ok(())
    }
}
