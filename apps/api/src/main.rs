mod config;
mod db;
mod errors;
mod gap;
mod models;
mod positions;
mod resources;
mod routes;
mod skills;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::errors::AppError;
use crate::positions::seed::seed_catalog;
use crate::resources::CatalogRecommender;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillgap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&db).await?;

    let store = Arc::new(PgStore::new(db));

    if config.seed_catalog_on_startup {
        match seed_catalog(store.as_ref()).await {
            Ok(seeded) => info!("Seeded {seeded} catalog positions"),
            Err(AppError::Conflict(_)) => warn!("Catalog already populated, startup seed skipped"),
            Err(e) => return Err(e.into()),
        }
    }

    let state = AppState {
        store,
        recommender: Arc::new(CatalogRecommender),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
