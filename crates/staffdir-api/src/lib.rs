//! # staffdir-api
//!
//! HTTP API layer for StaffDir: routes, handlers, DTOs, and application
//! bootstrap.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
