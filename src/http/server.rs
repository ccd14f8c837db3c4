//! HTTP server for the aggregator

use axum::{
    routing::post,
    Router,
};
use crate::graph::GraphStore;
use crate::persistence::FileSink;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;
use super::handler::{merge_handler, snapshot_handler};

/// Shared state injected into request handlers
#[derive(Clone)]
pub struct AppState {
    /// The one mutable graph, behind a single writer/reader lock
    pub store: Arc<RwLock<GraphStore>>,

    /// Optional file mirror flushed after every accepted write
    pub sink: Option<Arc<FileSink>>,
}

/// Build the application router
///
/// Peers POST their neighbor tables to `/`; the visualizer GETs the whole
/// graph from the same path. The permissive CORS layer lets a frontend
/// served from anywhere read the feed.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(merge_handler).get(snapshot_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server managing the aggregator API
pub struct HttpServer {
    state: AppState,
    address: String,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(
        store: Arc<RwLock<GraphStore>>,
        sink: Option<FileSink>,
        address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            state: AppState {
                store,
                sink: sink.map(Arc::new),
            },
            address: address.into(),
            port,
        }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone());

        let addr = format!("{}:{}", self.address, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Aggregator listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
