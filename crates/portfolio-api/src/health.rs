use axum::Json;

use portfolio_types::api::HealthResponse;

/// GET /api/health — static liveness payload, never touches the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
