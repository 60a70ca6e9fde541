//! Storage factory for runtime backend selection

use std::sync::Arc;

use sqlx::postgres::PgPool;

use crate::domain::DomainError;
use crate::domain::storage::{Storage, StorageEntity};

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: memory, postgres",
                s
            ))),
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates an in-memory storage
    pub fn create_in_memory<E>() -> Arc<dyn Storage<E>>
    where
        E: StorageEntity,
    {
        Arc::new(InMemoryStorage::<E>::new())
    }

    /// Creates a PostgreSQL storage with its own connection pool
    pub async fn create_postgres<E>(
        config: &PostgresConfig,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity,
    {
        let storage = PostgresStorage::<E>::connect(config, table_name).await?;
        storage.ensure_table().await?;
        Ok(Arc::new(storage))
    }

    /// Creates a PostgreSQL storage sharing an existing pool
    pub async fn create_postgres_with_pool<E>(
        pool: PgPool,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity,
    {
        let storage = PostgresStorage::<E>::new(pool, table_name);
        storage.ensure_table().await?;
        Ok(Arc::new(storage))
    }
}
