//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, SeaOrmPostRepository, connect, ensure_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the database, make sure the posts table exists, and wire
    /// up the repository.
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = connect(config).await?;
        ensure_schema(&db).await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(SeaOrmPostRepository::new(db)),
        })
    }
}
