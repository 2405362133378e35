//! Catalog reads: paginated search, single record, full dump.

use crate::config::CatalogConfig;
use crate::error::AppError;
use crate::response::PageResult;
use crate::service::presenter::{present_car, PresentedCar};
use crate::sql::SearchFilter;
use crate::store::CarStore;
use std::sync::Arc;

/// Parameters for one `/list` request, already defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based. Zero and negative values are passed through unchanged.
    pub page: i64,
    pub query: String,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            page: 1,
            query: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CarStore>,
    config: Arc<CatalogConfig>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CarStore>, config: CatalogConfig) -> Self {
        CatalogService {
            store,
            config: Arc::new(config),
        }
    }

    /// One page of matching cars plus totals. The page and count reads share one filter and run concurrently.
    pub async fn list_cars(&self, params: &ListParams) -> Result<PageResult<PresentedCar>, AppError> {
        let limit = self.config.page_size;
        let offset = params.page.saturating_sub(1).saturating_mul(limit);
        let filter = SearchFilter::new(&params.query);
        tracing::debug!(page = params.page, offset, query = %params.query, "list cars");

        let (rows, total_items) = tokio::try_join!(
            self.store.fetch_page(&filter, limit, offset),
            self.store.count(&filter)
        )?;

        let data = rows
            .into_iter()
            .map(|row| present_car(row, &self.config.images))
            .collect();
        Ok(PageResult::new(data, params.page, limit, total_items))
    }

    pub async fn car_details(&self, id: &str) -> Result<PresentedCar, AppError> {
        let row = self
            .store
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("car with id '{}'", id)))?;
        Ok(present_car(row, &self.config.images))
    }

    /// Every car up to the configured cap. An empty table is reported as not found.
    pub async fn all_cars(&self) -> Result<Vec<PresentedCar>, AppError> {
        let rows = self.store.fetch_all(self.config.max_records).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound("no cars in catalog".into()));
        }
        Ok(rows
            .into_iter()
            .map(|row| present_car(row, &self.config.images))
            .collect())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
