//! Config validation: numeric bounds and identifier safety.

use crate::config::ServiceConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern compiles"))
}

/// True when `s` is a plain SQL identifier. Schema and table names are interpolated into SQL text.
pub fn is_safe_identifier(s: &str) -> bool {
    identifier_re().is_match(s)
}

pub fn validate(config: &ServiceConfig) -> Result<(), ConfigError> {
    let catalog = &config.catalog;
    if catalog.page_size < 1 {
        return Err(ConfigError::Invalid {
            key: "PAGE_SIZE",
            value: catalog.page_size.to_string(),
            reason: "must be at least 1",
        });
    }
    if catalog.max_records < 1 {
        return Err(ConfigError::Invalid {
            key: "MAX_RECORDS",
            value: catalog.max_records.to_string(),
            reason: "must be at least 1",
        });
    }
    if config.db_max_connections < 1 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: config.db_max_connections.to_string(),
            reason: "must be at least 1",
        });
    }
    for (key, value) in [("DB_SCHEMA", &catalog.table.schema), ("DB_TABLE", &catalog.table.table)] {
        if !is_safe_identifier(value) {
            return Err(ConfigError::UnsafeIdentifier {
                key,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_safe_identifier("HotWheels"));
        assert!(is_safe_identifier("_cars2"));
        assert!(!is_safe_identifier("2cars"));
        assert!(!is_safe_identifier("Hot\"Wheels"));
        assert!(!is_safe_identifier("cars; DROP TABLE x"));
        assert!(!is_safe_identifier(""));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = ServiceConfig::default();
        config.catalog.page_size = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Invalid { key: "PAGE_SIZE", .. })));
    }

    #[test]
    fn quoted_table_name_is_rejected() {
        let mut config = ServiceConfig::default();
        config.catalog.table.table = "Hot\"Wheels".into();
        assert!(matches!(validate(&config), Err(ConfigError::UnsafeIdentifier { key: "DB_TABLE", .. })));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&ServiceConfig::default()).is_ok());
    }
}
