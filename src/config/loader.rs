//! Load config from environment variables.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, then validate. Unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let endpoint = get("OBJECT_STORE_ENDPOINT").unwrap_or_else(|| DEFAULT_OBJECT_STORE_ENDPOINT.into());
        let config = ServiceConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            cors_allow_origin: get("CORS_ALLOW_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into()),
            catalog: CatalogConfig {
                table: TableRef {
                    schema: get("DB_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into()),
                    table: get("DB_TABLE").unwrap_or_else(|| DEFAULT_TABLE.into()),
                },
                images: ImageBucket {
                    endpoint: endpoint.trim_end_matches('/').to_string(),
                    bucket: get("OBJECT_STORE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.into()),
                },
                page_size: parse_or(get("PAGE_SIZE"), "PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
                max_records: parse_or(get("MAX_RECORDS"), "MAX_RECORDS", DEFAULT_MAX_RECORDS)?,
            },
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
            key,
            value: v,
            reason: "not a number",
        }),
    }
}
