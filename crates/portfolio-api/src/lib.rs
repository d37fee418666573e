pub mod contacts;
pub mod error;
pub mod health;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// All `/api` routes. Cross-cutting layers (CORS, tracing) are added by the
/// binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contacts::submit_contact))
        .route("/api/messages", get(contacts::list_messages))
        .with_state(state)
}
