use std::sync::Arc;

use sqlx::PgPool;

use crate::profile::provider::ProfileProvider;
use crate::search::service::JobSearchService;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store and profile provider are constructor-injected
/// here at startup; nothing in the codebase reaches for a global.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub store: Arc<dyn JobStore>,
    pub search: JobSearchService,
    pub profiles: Arc<dyn ProfileProvider>,
}
