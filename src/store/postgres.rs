//! PostgreSQL-backed catalog store.

use super::{CarRow, CarStore};
use crate::config::{ServiceConfig, TableRef};
use crate::error::AppError;
use crate::sql::{count_matching, select_all, select_by_id, select_page, QueryBuf, SearchFilter, ROW_COLUMN};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;

/// Open a connection pool sized from config.
pub async fn connect_pool(config: &ServiceConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
    table: TableRef,
}

impl PgCarStore {
    pub fn new(pool: PgPool, table: TableRef) -> Self {
        PgCarStore { pool, table }
    }

    fn bind<'q>(q: &'q QueryBuf) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.as_str());
        }
        query
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn fetch_page(&self, filter: &SearchFilter, limit: i64, offset: i64) -> Result<Vec<CarRow>, AppError> {
        let q = select_page(&self.table, filter, limit, offset);
        let rows = Self::bind(&q).fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }

    async fn count(&self, filter: &SearchFilter) -> Result<i64, AppError> {
        let q = count_matching(&self.table, filter);
        let row = Self::bind(&q).fetch_optional(&self.pool).await?;
        match row {
            Some(r) => Ok(r.try_get::<Option<i64>, _>("total_count")?.unwrap_or(0)),
            None => Ok(0),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<CarRow>, AppError> {
        let q = select_by_id(&self.table, id);
        let row = Self::bind(&q).fetch_optional(&self.pool).await?;
        row.as_ref().map(decode_row).transpose()
    }

    async fn fetch_all(&self, limit: i64) -> Result<Vec<CarRow>, AppError> {
        let q = select_all(&self.table, limit);
        let rows = Self::bind(&q).fetch_all(&self.pool).await?;
        rows.iter().map(decode_row).collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Each row arrives as one `row_to_json` object, so every column type PostgreSQL can
/// render as JSON (numeric, enums, arrays, time) reaches the client intact.
fn decode_row(row: &PgRow) -> Result<CarRow, AppError> {
    let Json(car) = row.try_get::<Json<CarRow>, _>(ROW_COLUMN)?;
    Ok(car)
}
