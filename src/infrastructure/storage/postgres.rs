//! PostgreSQL storage implementation with connection pooling

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::DomainError;
use crate::domain::storage::{RecordId, Storage, StorageEntity};

/// PostgreSQL storage configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/bookshelf".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// PostgreSQL storage implementation
///
/// Stores entities as JSONB documents in a table with (id, data) columns
/// and allocates identifiers from a per-table sequence.
pub struct PostgresStorage<E>
where
    E: StorageEntity,
{
    pool: PgPool,
    table_name: String,
    _phantom: PhantomData<E>,
}

impl<E> Debug for PostgresStorage<E>
where
    E: StorageEntity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStorage")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl<E> PostgresStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new PostgreSQL storage with the given pool and table name
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
            _phantom: PhantomData,
        }
    }

    /// Creates a new PostgreSQL storage with its own connection pool
    pub async fn connect(
        config: &PostgresConfig,
        table_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(std::time::Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool, table_name))
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensures the storage table and its id sequence exist
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let table = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGINT PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table_name
        );

        sqlx::query(&table)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        let sequence = format!("CREATE SEQUENCE IF NOT EXISTS {}_id_seq", self.table_name);

        sqlx::query(&sequence)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create sequence: {}", e)))?;

        Ok(())
    }

    fn decode(value: serde_json::Value) -> Result<E, DomainError> {
        serde_json::from_value(value)
            .map_err(|e| DomainError::storage(format!("Failed to deserialize entity: {}", e)))
    }

    fn encode(entity: &E) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(entity)
            .map_err(|e| DomainError::storage(format!("Failed to serialize entity: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for PostgresStorage<E>
where
    E: StorageEntity,
{
    async fn get(&self, id: RecordId) -> Result<Option<E>, DomainError> {
        let query = format!("SELECT data FROM {} WHERE id = $1", self.table_name);

        let row = sqlx::query(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get record: {}", e)))?;

        match row {
            Some(row) => {
                let data: serde_json::Value = row
                    .try_get("data")
                    .map_err(|e| DomainError::storage(format!("Failed to read column: {}", e)))?;
                Ok(Some(Self::decode(data)?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let query = format!("SELECT data FROM {}", self.table_name);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list records: {}", e)))?;

        rows.into_iter()
            .map(|row| {
                let data: serde_json::Value = row
                    .try_get("data")
                    .map_err(|e| DomainError::storage(format!("Failed to read column: {}", e)))?;
                Self::decode(data)
            })
            .collect()
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let query = format!("INSERT INTO {} (id, data) VALUES ($1, $2)", self.table_name);

        let result = sqlx::query(&query)
            .bind(entity.id().as_i64())
            .bind(Self::encode(&entity)?)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(entity),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                DomainError::conflict(format!("Record with id '{}' already exists", entity.id())),
            ),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to create record: {}",
                e
            ))),
        }
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let query = format!(
            "UPDATE {} SET data = $2, updated_at = NOW() WHERE id = $1",
            self.table_name
        );

        let result = sqlx::query(&query)
            .bind(entity.id().as_i64())
            .bind(Self::encode(&entity)?)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update record: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Record with id '{}' not found",
                entity.id()
            )));
        }

        Ok(entity)
    }

    async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.table_name);

        let result = sqlx::query(&query)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete record: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn next_id(&self) -> Result<RecordId, DomainError> {
        let query = format!("SELECT nextval('{}_id_seq') AS id", self.table_name);

        let row = sqlx::query(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to allocate id: {}", e)))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to read sequence value: {}", e)))?;

        Ok(RecordId::new(id))
    }

    async fn exists(&self, id: RecordId) -> Result<bool, DomainError> {
        let query = format!("SELECT 1 FROM {} WHERE id = $1", self.table_name);

        let row = sqlx::query(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check record: {}", e)))?;

        Ok(row.is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let query = format!("SELECT COUNT(*) AS count FROM {}", self.table_name);

        let row = sqlx::query(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count records: {}", e)))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| DomainError::storage(format!("Failed to read count: {}", e)))?;

        Ok(count as usize)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let query = format!("DELETE FROM {}", self.table_name);

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to clear table: {}", e)))?;

        Ok(())
    }
}
