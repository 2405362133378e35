//! Read-only access to the catalog table.

mod memory;
mod postgres;

pub use memory::MemoryCarStore;
pub use postgres::{connect_pool, PgCarStore};

use crate::error::AppError;
use crate::sql::SearchFilter;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One catalog row as returned by the store. Columns are opaque and passed through.
pub type CarRow = Map<String, Value>;

#[async_trait]
pub trait CarStore: Send + Sync {
    /// Matching rows ordered by id, `limit` rows starting at `offset`.
    async fn fetch_page(&self, filter: &SearchFilter, limit: i64, offset: i64) -> Result<Vec<CarRow>, AppError>;

    /// Number of rows matching `filter`; 0 when the store returns no count row.
    async fn count(&self, filter: &SearchFilter) -> Result<i64, AppError>;

    async fn fetch_by_id(&self, id: &str) -> Result<Option<CarRow>, AppError>;

    /// Every row ordered by id, at most `limit`.
    async fn fetch_all(&self, limit: i64) -> Result<Vec<CarRow>, AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
