//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{RecordId, StorageEntity};

/// Generic storage trait for CRUD operations on any entity type
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity,
{
    /// Retrieves an entity by its identifier
    async fn get(&self, id: RecordId) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity, returns error if the identifier is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Updates an existing entity, returns error if not found
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its identifier, returns true if deleted
    async fn delete(&self, id: RecordId) -> Result<bool, DomainError>;

    /// Allocates the next free identifier
    async fn next_id(&self) -> Result<RecordId, DomainError>;

    /// Checks if an entity exists by its identifier
    async fn exists(&self, id: RecordId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }

    /// Returns the count of entities
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    /// Clears all entities (use with caution)
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock storage for testing, with optional error injection
    #[derive(Debug)]
    pub struct MockStorage<E>
    where
        E: StorageEntity,
    {
        entities: Mutex<HashMap<i64, E>>,
        error: Mutex<Option<String>>,
    }

    impl<E> Default for MockStorage<E>
    where
        E: StorageEntity,
    {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E> MockStorage<E>
    where
        E: StorageEntity,
    {
        pub fn new() -> Self {
            Self {
                entities: Mutex::new(HashMap::new()),
                error: Mutex::new(None),
            }
        }

        pub fn with_entity(self, entity: E) -> Self {
            self.entities
                .lock()
                .unwrap()
                .insert(entity.id().as_i64(), entity);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::storage(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl<E> Storage<E> for MockStorage<E>
    where
        E: StorageEntity,
    {
        async fn get(&self, id: RecordId) -> Result<Option<E>, DomainError> {
            self.check_error()?;
            Ok(self.entities.lock().unwrap().get(&id.as_i64()).cloned())
        }

        async fn list(&self) -> Result<Vec<E>, DomainError> {
            self.check_error()?;
            Ok(self.entities.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, entity: E) -> Result<E, DomainError> {
            self.check_error()?;
            let key = entity.id().as_i64();
            let mut entities = self.entities.lock().unwrap();

            if entities.contains_key(&key) {
                return Err(DomainError::conflict(format!(
                    "Record '{}' already exists",
                    key
                )));
            }

            entities.insert(key, entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: E) -> Result<E, DomainError> {
            self.check_error()?;
            let key = entity.id().as_i64();
            let mut entities = self.entities.lock().unwrap();

            if !entities.contains_key(&key) {
                return Err(DomainError::not_found(format!("Record '{}' not found", key)));
            }

            entities.insert(key, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.entities.lock().unwrap().remove(&id.as_i64()).is_some())
        }

        async fn next_id(&self) -> Result<RecordId, DomainError> {
            self.check_error()?;
            let max = self
                .entities
                .lock()
                .unwrap()
                .keys()
                .max()
                .copied()
                .unwrap_or(0);
            Ok(RecordId::new(max + 1))
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_error()?;
            self.entities.lock().unwrap().clear();
            Ok(())
        }
    }
}
