//! Catalog routes. Everything outside the common routes falls through to segment-based dispatch.

use crate::handlers::dispatch;
use crate::state::AppState;
use axum::Router;

pub fn catalog_routes(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}
