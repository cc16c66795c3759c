//! Route modules for the pricing server
//!
//! - pricing: forward and European option pricing endpoints
//! - health: health check and readiness endpoints

pub mod health;
pub mod pricing;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use pricer_pricing::CachedPricer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Cache-aside pricing layer (store handle injected at startup)
    pub pricer: Arc<CachedPricer>,
    /// Label of the active store backend ("redis" or "memory")
    pub store_backend: &'static str,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        config: Arc<ServerConfig>,
        pricer: Arc<CachedPricer>,
        store_backend: &'static str,
    ) -> Self {
        Self {
            config,
            pricer,
            store_backend,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use infra_store::MemoryStore;

    AppState::new(
        Arc::new(ServerConfig::default()),
        Arc::new(CachedPricer::new(Arc::new(MemoryStore::new()))),
        "memory",
    )
}
