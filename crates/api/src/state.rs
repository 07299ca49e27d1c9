use std::sync::Arc;

use spycat_core::breeds::BreedCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: spycat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Recognised breed names, fetched once per process.
    pub breeds: Arc<BreedCatalog>,
}
