//! Route definitions for the StaffDir HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Paths mirror the contract the existing frontend
//! consumes.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/users", get(handlers::directory::list_members))
        .route("/users/teams", get(handlers::directory::list_teams))
        .route("/users/filter", get(handlers::directory::filter_members))
        .route("/users/{id}", get(handlers::directory::get_member))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
