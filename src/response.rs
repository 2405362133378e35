//! Response bodies shared by the catalog handlers.

use serde::Serialize;

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> PageResult<T> {
    /// `limit` must be positive; `total_pages` is `ceil(total_items / limit)`.
    pub fn new(data: Vec<T>, page: i64, limit: i64, total_items: i64) -> Self {
        let total_pages = if total_items <= 0 { 0 } else { (total_items + limit - 1) / limit };
        PageResult {
            data,
            page,
            limit,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

pub const WELCOME_MESSAGE: &str =
    "Bienvenido a HotWheels API. Usa /list?page=1&query=..., /all-models o /modelo/{ID}";

pub fn welcome() -> Welcome {
    Welcome {
        message: WELCOME_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageResult::<()>::new(vec![], 2, 50, 120).total_pages, 3);
        assert_eq!(PageResult::<()>::new(vec![], 1, 50, 100).total_pages, 2);
        assert_eq!(PageResult::<()>::new(vec![], 1, 50, 1).total_pages, 1);
        assert_eq!(PageResult::<()>::new(vec![], 1, 50, 0).total_pages, 0);
    }

    #[test]
    fn serializes_with_camel_case_totals() {
        let v = serde_json::to_value(PageResult::new(vec![1, 2], 1, 50, 2)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"data": [1, 2], "page": 1, "limit": 50, "totalItems": 2, "totalPages": 1})
        );
    }
}
