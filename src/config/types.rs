//! Runtime configuration passed into the service at construction.

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/hotwheels";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_TABLE: &str = "HotWheels";
pub const DEFAULT_OBJECT_STORE_ENDPOINT: &str =
    "https://bd5ed32b0fb79bff9258f69dcf4e6476.r2.cloudflarestorage.com";
pub const DEFAULT_BUCKET: &str = "hw-img-th";
pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const DEFAULT_MAX_RECORDS: i64 = 16_000;
pub const DEFAULT_CORS_ORIGIN: &str = "*";

/// Schema-qualified table the catalog reads from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRef {
    pub schema: String,
    pub table: String,
}

/// Object store bucket holding cover images. Only used to build URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBucket {
    /// Endpoint without trailing slash.
    pub endpoint: String,
    pub bucket: String,
}

impl ImageBucket {
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub table: TableRef,
    pub images: ImageBucket,
    /// Rows per page for `/list`.
    pub page_size: i64,
    /// Upper bound on rows returned by `/all-models`.
    pub max_records: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            table: TableRef {
                schema: DEFAULT_SCHEMA.into(),
                table: DEFAULT_TABLE.into(),
            },
            images: ImageBucket {
                endpoint: DEFAULT_OBJECT_STORE_ENDPOINT.into(),
                bucket: DEFAULT_BUCKET.into(),
            },
            page_size: DEFAULT_PAGE_SIZE,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    /// Value of `Access-Control-Allow-Origin`; `*` or one fixed origin.
    pub cors_allow_origin: String,
    pub catalog: CatalogConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_allow_origin: DEFAULT_CORS_ORIGIN.into(),
            catalog: CatalogConfig::default(),
        }
    }
}
