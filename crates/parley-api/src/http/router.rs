//! Axum router configuration with all routes and middleware.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the router.
///
/// Routes:
/// - POST   /chats
/// - POST   /chats/{id}/messages
/// - GET    /chats/{id}?limit=N
/// - DELETE /chats/{id}
/// - GET    /health
///
/// Every response, including timeouts, gets `Content-Type: application/json`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/chats", post(handlers::chat::create_chat))
        .route(
            "/chats/{id}",
            get(handlers::chat::get_chat).delete(handlers::chat::delete_chat),
        )
        .route("/chats/{id}/messages", post(handlers::chat::create_message))
        .route("/health", get(health_check));

    with_middleware(routes, request_timeout).with_state(state)
}

/// Wrap `router` in the shared middleware stack.
///
/// The timeout sits innermost so its `408` still gets the content type and
/// shows up in the request log.
fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe. Never touches storage.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
