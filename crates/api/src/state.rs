use std::sync::Arc;

use crate::service::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally, the service
/// is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used by the health check).
    pub pool: movie_db::DbPool,
    /// Movie service facade; handlers go through this rather than the
    /// repository so tests can substitute their own implementation.
    pub service: Arc<dyn MovieService>,
}
