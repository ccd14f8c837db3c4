//! HTTP surface of the aggregator
//!
//! One write route for peers reporting their neighbor tables, one read
//! route serving the merged graph to the visualizer. The transport is a
//! caller of the graph core, not part of it.

pub mod handler;
pub mod server;

pub use server::{router, AppState, HttpServer};
