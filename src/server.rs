//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::zones::ZoneTable;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub zones: Arc<ZoneTable>,
}

/// Create application state with the built-in zone table.
pub fn create_app_state() -> AppState {
    AppState {
        zones: Arc::new(ZoneTable::new()),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Lookup endpoint. Routed for any method: the contract never
        // restricted clients to GET.
        .route("/getTime", any(api::handle_get_time))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
