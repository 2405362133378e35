//! Shared application state for all routes. Immutable after startup.

use crate::config::ServiceConfig;
use crate::error::ConfigError;
use crate::middleware::CorsHeaders;
use crate::service::CatalogService;
use crate::store::CarStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub cors: CorsHeaders,
}

impl AppState {
    pub fn new(store: Arc<dyn CarStore>, config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(AppState {
            catalog: CatalogService::new(store, config.catalog.clone()),
            cors: CorsHeaders::new(&config.cors_allow_origin)?,
        })
    }
}
