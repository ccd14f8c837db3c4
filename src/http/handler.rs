//! HTTP handlers for the aggregator API

use axum::{
    extract::rejection::JsonRejection,
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use crate::graph::Batch;
use serde_json::json;
use tracing::{debug, error, warn};
use super::server::AppState;

/// Handler for peer reports
///
/// The body must decode as a `Batch` (string -> string -> string); anything
/// else is answered with a client error before the merge loop ever sees it.
pub async fn merge_handler(
    State(state): State<AppState>,
    payload: Result<Json<Batch>, JsonRejection>,
) -> Response {
    let Json(batch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("rejected write request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let mut store = state.store.write().await;
    store.merge(&batch);
    debug!(
        nodes = store.node_count(),
        links = store.link_count(),
        "merged batch of {} reports",
        batch.len()
    );

    // The merge already succeeded; a failed flush only costs the mirror file.
    if let Some(sink) = &state.sink {
        if let Err(e) = sink.flush(&store.snapshot()) {
            error!("failed to persist graph to {:?}: {}", sink.path(), e);
        }
    }

    StatusCode::NO_CONTENT.into_response()
}

/// Handler for the visualizer feed
///
/// Serves the whole graph as an indented JSON document.
pub async fn snapshot_handler(State(state): State<AppState>) -> Response {
    let graph = state.store.read().await.snapshot();

    match serde_json::to_string_pretty(&graph) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("failed to serialize snapshot: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
