//! Infrastructure layer for external integrations.
//!
//! This layer implements the [`TodoRepository`] contract defined by the
//! domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL table storage
//! - [`document`] - Redis document storage
//! - [`memory`] - Process-local storage

pub mod document;
pub mod memory;
pub mod persistence;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::TodoRepository;

pub use document::RedisTodoRepository;
pub use memory::InMemoryTodoRepository;
pub use persistence::PgTodoRepository;

/// Builds the repository selected by [`Config::store_backend`].
///
/// For PostgreSQL this opens the pool with the configured limits and applies
/// pending migrations. For Redis it connects and PINGs once.
///
/// # Errors
///
/// Returns an error if the store is unreachable, the connection URL is
/// missing, or migrations fail.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn TodoRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgTodoRepository::new(Arc::new(pool))))
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store")?;

            let repository = RedisTodoRepository::connect(url)
                .await
                .context("Failed to connect to Redis")?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; todos are lost on restart");
            Ok(Arc::new(InMemoryTodoRepository::new()))
        }
    }
}
