//! Bookshelf API
//!
//! A REST API for managing authors and their books with:
//! - Paginated, sorted list endpoints
//! - TTL-cached point lookups with a per-request cache duration
//! - Pluggable storage (in-memory, PostgreSQL) and cache (in-memory, Redis) backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::str::FromStr;
use std::sync::Arc;

use api::state::AppState;
use domain::{Author, Book, Cache, Storage};
use infrastructure::cache::{CacheFactory, CacheType};
use infrastructure::services::{AuthorService, BookService};
use infrastructure::storage::{StorageFactory, StorageType};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend =
        StorageType::from_str(&config.storage.backend).unwrap_or(StorageType::InMemory);

    info!("Storage backend: {:?}", storage_backend);

    let (author_storage, book_storage): (Arc<dyn Storage<Author>>, Arc<dyn Storage<Book>>) =
        match storage_backend {
            StorageType::InMemory => (
                StorageFactory::create_in_memory::<Author>(),
                StorageFactory::create_in_memory::<Book>(),
            ),
            StorageType::Postgres => {
                let database_url = std::env::var("DATABASE_URL")
                    .ok()
                    .or_else(|| config.storage.url.clone())
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "PostgreSQL storage requires DATABASE_URL or storage.url"
                        )
                    })?;

                info!("Connecting to PostgreSQL...");
                let pg_pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.storage.max_connections)
                    .connect(&database_url)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
                info!("PostgreSQL connection established");

                (
                    StorageFactory::create_postgres_with_pool::<Author>(
                        pg_pool.clone(),
                        "authors",
                    )
                    .await?,
                    StorageFactory::create_postgres_with_pool::<Book>(pg_pool, "books").await?,
                )
            }
        };

    let cache_backend = CacheType::from_str(&config.cache.backend).unwrap_or(CacheType::InMemory);

    info!("Cache backend: {:?}", cache_backend);

    let cache: Arc<dyn Cache> = match cache_backend {
        CacheType::InMemory => {
            CacheFactory::create(&infrastructure::cache::CacheConfig::in_memory()).await?
        }
        CacheType::Redis => {
            let redis_url = std::env::var("REDIS_URL")
                .ok()
                .or_else(|| config.cache.url.clone())
                .ok_or_else(|| anyhow::anyhow!("Redis cache requires REDIS_URL or cache.url"))?;

            let mut cache_config = infrastructure::cache::CacheConfig::redis(redis_url);
            if let Some(prefix) = &config.cache.key_prefix {
                cache_config = cache_config.with_key_prefix(prefix);
            }

            CacheFactory::create(&cache_config).await?
        }
    };

    let author_service = Arc::new(AuthorService::new(
        author_storage.clone(),
        book_storage.clone(),
        cache.clone(),
    ));
    let book_service = Arc::new(BookService::new(book_storage, author_storage, cache.clone()));

    Ok(AppState::new(author_service, book_service, cache))
}
