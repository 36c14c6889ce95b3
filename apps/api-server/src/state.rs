//! Application state - shared across all handlers.

use std::sync::Arc;

use pgo_core::PostService;
use pgo_core::ports::PostRepository;
use pgo_infra::{
    DatabaseConfig, DatabaseHandle, DbErr, InMemoryPostRepository, PostgresPostRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    ///
    /// Without a database URL the server runs on an in-memory store. A
    /// configured database that cannot be reached is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, DbErr> {
        let state = match db_config {
            Some(config) => {
                let db = DatabaseHandle::init(config).await?;
                Self::with_repository(Arc::new(PostgresPostRepository::new(db.main)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::with_repository(Arc::new(InMemoryPostRepository::new()))
            }
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State over an already constructed repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }
}
