//! Route tables and the assembled application router.

pub mod catalog;
pub mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

use crate::middleware::cors_middleware;
use crate::state::AppState;
use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

/// Common and catalog routes behind the CORS middleware and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .layer(from_fn_with_state(state.cors.clone(), cors_middleware))
        .layer(TraceLayer::new_for_http())
}
