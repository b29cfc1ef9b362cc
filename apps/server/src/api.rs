use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use btcquote_core::TOOL_GET_BITCOIN_PRICE;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Deserialize)]
struct InvocationRequest {
    name: String,
    // Accepted for shape compatibility; the tool takes no arguments.
    #[serde(default)]
    #[allow(dead_code)]
    arguments: Value,
}

async fn discovery(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.discovery_json.clone(),
    )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Long-lived push channel: the discovery payload once at open, then a
/// keep-alive comment every 30s until the peer disconnects. Dropping the
/// response body on disconnect releases the keep-alive timer with it.
async fn events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let handshake = SseEvent::default()
        .event("tools")
        .data(state.discovery_json.clone());
    let stream =
        stream::once(async move { Ok::<_, Infallible>(handshake) }).chain(stream::pending());
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("keep-alive"),
    )
}

/// Buffers the whole body before parsing; a malformed body becomes a
/// structured 400 instead of an extractor rejection.
async fn execute(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<Json<Value>> {
    let request: InvocationRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedRequest(e.to_string()))?;

    if request.name != TOOL_GET_BITCOIN_PRICE {
        return Err(ApiError::UnknownTool(request.name));
    }

    let record = state.registry.get_price().await?;
    Ok(Json(json!({ "result": record })))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(discovery))
        .route("/health", get(health))
        .route("/events", get(events))
        .route("/execute", post(execute))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
