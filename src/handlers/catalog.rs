//! Catalog handlers. Dispatch is by path segment, so `/list`, `/api/list` and `/v1/list/x` all list.

use crate::error::AppError;
use crate::response::welcome;
use crate::service::ListParams;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum CatalogRoute<'a> {
    List,
    AllModels,
    Detail(&'a str),
    Welcome,
}

/// Pick the handler from the non-empty path segments. `list` wins over the other keywords.
pub fn resolve_route(path: &str) -> CatalogRoute<'_> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.contains(&"list") {
        return CatalogRoute::List;
    }
    if segments.contains(&"all-models") {
        return CatalogRoute::AllModels;
    }
    if let Some(idx) = segments.iter().position(|s| *s == "modelo") {
        if let Some(id) = segments.get(idx + 1) {
            return CatalogRoute::Detail(*id);
        }
    }
    CatalogRoute::Welcome
}

/// Leading integer of `raw` (`"2abc"` -> 2); 1 when absent or not a number.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(leading_int).unwrap_or(1)
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let n: i64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

pub fn list_params(params: &HashMap<String, String>) -> ListParams {
    ListParams {
        page: parse_page(params.get("page").map(String::as_str)),
        query: params.get("query").cloned().unwrap_or_default(),
    }
}

/// Fallback handler for every path not claimed by the common routes.
pub async fn dispatch(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    match resolve_route(uri.path()) {
        CatalogRoute::List => {
            let page = state.catalog.list_cars(&list_params(&params)).await?;
            Ok(Json(page).into_response())
        }
        CatalogRoute::AllModels => {
            let cars = state.catalog.all_cars().await?;
            Ok(Json(cars).into_response())
        }
        CatalogRoute::Detail(id) => {
            let car = state.catalog.car_details(id).await?;
            Ok(Json(car).into_response())
        }
        CatalogRoute::Welcome => Ok(Json(welcome()).into_response()),
    }
}
