//! CORS headers on every response and preflight short-circuit.

use crate::error::ConfigError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "GET, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

#[derive(Clone, Debug)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
}

impl CorsHeaders {
    /// `origin` is `*` or a single fixed origin.
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let allow_origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
            key: "CORS_ALLOW_ORIGIN",
            value: origin.to_string(),
            reason: "not a valid header value",
        })?;
        Ok(CorsHeaders { allow_origin })
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}

/// OPTIONS on any path answers 204 before routing. Everything else gets CORS headers
/// and a JSON content type, including error responses.
pub async fn cors_middleware(State(cors): State<CorsHeaders>, req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        cors.apply(res.headers_mut());
        return res;
    }

    let mut res = next.run(req).await;
    cors.apply(res.headers_mut());
    res.headers_mut()
        .entry(header::CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    res
}
