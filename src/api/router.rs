use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::chat;
use super::health;
use super::keys;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no credential required)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Key issuance
        .route("/generate-key", post(keys::generate_key))
        // Protected endpoints
        .route("/chat", post(chat::chat))
        .route("/keys", get(keys::list_keys))
        .route("/revoke-key/{key}", post(keys::revoke_key))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
