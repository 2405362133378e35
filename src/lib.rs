//! HotWheels catalog API: paginated search over one table, served as JSON with CORS headers.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{CatalogConfig, ImageBucket, ServiceConfig, TableRef};
pub use error::{AppError, ConfigError};
pub use response::PageResult;
pub use routes::app_router;
pub use service::{CatalogService, ListParams, PresentedCar};
pub use state::AppState;
pub use store::{connect_pool, CarRow, CarStore, MemoryCarStore, PgCarStore};
