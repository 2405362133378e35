//! In-memory catalog store for tests and local runs without a database.

use super::{CarRow, CarStore};
use crate::error::AppError;
use crate::sql::{SearchFilter, ID_COLUMN, SEARCH_FIELDS};
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;

/// Rows kept sorted by id. Search is a case-insensitive substring match over the same
/// fields the SQL builder uses; `%` and `_` in the term are matched literally.
#[derive(Clone, Debug, Default)]
pub struct MemoryCarStore {
    rows: Vec<CarRow>,
}

impl MemoryCarStore {
    pub fn new(mut rows: Vec<CarRow>) -> Self {
        rows.sort_by(|a, b| compare_ids(a.get(ID_COLUMN), b.get(ID_COLUMN)));
        MemoryCarStore { rows }
    }

    fn matching<'a>(&'a self, filter: &'a SearchFilter) -> impl Iterator<Item = &'a CarRow> + 'a {
        let needle = filter.term().map(str::to_lowercase);
        self.rows.iter().filter(move |row| match &needle {
            None => true,
            Some(n) => SEARCH_FIELDS
                .iter()
                .filter_map(|f| row.get(*f).and_then(searchable_text))
                .any(|text| text.to_lowercase().contains(n.as_str())),
        })
    }
}

fn searchable_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare_ids(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(Value::as_i64), b.and_then(Value::as_i64)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => {
            let a = a.and_then(searchable_text).unwrap_or_default();
            let b = b.and_then(searchable_text).unwrap_or_default();
            a.cmp(&b)
        }
    }
}

fn negative(what: &str, n: i64) -> AppError {
    AppError::Db(sqlx::Error::Protocol(format!("{} must not be negative: {}", what, n)))
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn fetch_page(&self, filter: &SearchFilter, limit: i64, offset: i64) -> Result<Vec<CarRow>, AppError> {
        // Same rejection PostgreSQL gives for negative LIMIT/OFFSET.
        if limit < 0 {
            return Err(negative("LIMIT", limit));
        }
        if offset < 0 {
            return Err(negative("OFFSET", offset));
        }
        Ok(self
            .matching(filter)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &SearchFilter) -> Result<i64, AppError> {
        Ok(self.matching(filter).count() as i64)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<CarRow>, AppError> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.get(ID_COLUMN).and_then(searchable_text).as_deref() == Some(id))
            .cloned())
    }

    async fn fetch_all(&self, limit: i64) -> Result<Vec<CarRow>, AppError> {
        Ok(self.rows.iter().take(limit.max(0) as usize).cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> CarRow {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    fn store() -> MemoryCarStore {
        MemoryCarStore::new(vec![
            row(json!({"id": 3, "modelo": "Bone Shaker", "marca": "HW", "categoria": "[\"Fantasy\"]"})),
            row(json!({"id": 1, "modelo": "Camaro", "marca": "Chevrolet", "categoria": "[\"Muscle\"]"})),
            row(json!({"id": 2, "modelo": "Lancer", "marca": "Mitsubishi", "categoria": "[\"Rally\"]"})),
        ])
    }

    #[tokio::test]
    async fn rows_are_ordered_by_id() {
        let page = store().fetch_page(&SearchFilter::all(), 10, 0).await.unwrap();
        let ids: Vec<_> = page.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let s = store();
        let filter = SearchFilter::new("rAlLy");
        assert_eq!(s.count(&filter).await.unwrap(), 1);
        let page = s.fetch_page(&filter, 10, 0).await.unwrap();
        assert_eq!(page[0]["modelo"], "Lancer");
    }

    #[tokio::test]
    async fn negative_offset_is_rejected() {
        assert!(store().fetch_page(&SearchFilter::all(), 10, -10).await.is_err());
    }

    #[tokio::test]
    async fn lookup_by_id_compares_text() {
        let s = store();
        assert!(s.fetch_by_id("2").await.unwrap().is_some());
        assert!(s.fetch_by_id("99").await.unwrap().is_none());
    }
}
