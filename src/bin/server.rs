//! Server: loads config from the environment, connects to PostgreSQL, serves the catalog API.

use hotwheels_api::{app_router, connect_pool, AppState, PgCarStore, ServiceConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hotwheels_api=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let pool = connect_pool(&config).await?;
    let store = PgCarStore::new(pool, config.catalog.table.clone());
    let state = AppState::new(Arc::new(store), &config)?;

    let app = app_router(state);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        table = %format!("{}.{}", config.catalog.table.schema, config.catalog.table.table),
        page_size = config.catalog.page_size,
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
