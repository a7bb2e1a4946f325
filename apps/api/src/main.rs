mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod profile;
mod routes;
mod search;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::profile::provider::{PgProfileProvider, ProfileProvider};
use crate::routes::build_router;
use crate::search::service::JobSearchService;
use crate::state::AppState;
use crate::store::{JobStore, PgJobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hireboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&pool).await?;
    info!("Migrations applied");

    // Wire up the document store and the services that sit on it
    let store: Arc<dyn JobStore> = Arc::new(PgJobStore::new(pool.clone()));
    let search = JobSearchService::new(store.clone());
    let profiles: Arc<dyn ProfileProvider> = Arc::new(PgProfileProvider::new(pool.clone()));
    info!("Job store and search service initialized");

    // Build app state
    let state = AppState {
        db: pool,
        store,
        search,
        profiles,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
