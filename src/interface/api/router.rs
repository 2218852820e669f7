//! API Router configuration

use super::calls_handler::{
    end_call, get_call, get_focused_call, health_check, list_calls, minimize_call,
    override_duration, restore_call, start_call, AppState,
};
use super::websocket::ws_handler;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    // Health check route
    let health_routes = Router::new().route("/health", get(health_check));

    // Call session routes
    let call_routes = Router::new()
        .route("/calls", post(start_call))
        .route("/calls", get(list_calls))
        .route("/calls/focused", get(get_focused_call))
        .route("/calls/:call_id", get(get_call))
        .route("/calls/:call_id", delete(end_call))
        .route("/calls/:call_id/minimize", post(minimize_call))
        .route("/calls/:call_id/restore", post(restore_call))
        .route("/calls/:call_id/duration", post(override_duration));

    // WebSocket route
    let ws_routes = Router::new().route("/ws", get(ws_handler));

    Router::new()
        .merge(health_routes)
        .merge(call_routes)
        .merge(ws_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
