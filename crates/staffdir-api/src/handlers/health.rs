//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await.unwrap_or(false);
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        database,
    })
}
