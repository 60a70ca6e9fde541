//! Generic resource service - shared list, lookup, caching and mutation logic

use std::sync::Arc;
use std::time::Duration;

use crate::domain::cache::{entity_key, Cache, CacheExt};
use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::{DomainError, Page, PageMeta, PageRequest, RecordId, Resource, SortOrder};

/// Shared CRUD plumbing for a single resource type.
///
/// Every concrete service (authors, books) wraps one of these and layers
/// its own rules on top. Sorting, pagination, projection and the TTL
/// cache behave identically across resources.
#[derive(Debug, Clone)]
pub struct ResourceService<E: Resource> {
    storage: Arc<dyn Storage<E>>,
    cache: Arc<dyn Cache>,
}

impl<E: Resource> ResourceService<E> {
    /// Create a new ResourceService with the given storage and cache
    pub fn new(storage: Arc<dyn Storage<E>>, cache: Arc<dyn Cache>) -> Self {
        Self { storage, cache }
    }

    /// List a page of projections, sorted by the resource sort key
    pub async fn list(&self, request: &PageRequest) -> Result<Page<E::Projection>, DomainError> {
        self.list_where(request, |_| true).await
    }

    /// List a page of projections matching the filter
    pub async fn list_where<F>(
        &self,
        request: &PageRequest,
        filter: F,
    ) -> Result<Page<E::Projection>, DomainError>
    where
        F: Fn(&E) -> bool + Send,
    {
        let mut entities: Vec<E> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|e| filter(e))
            .collect();

        // Ties on the sort key fall back to the id so pages stay stable
        entities.sort_by(|a, b| {
            a.sort_key()
                .cmp(b.sort_key())
                .then_with(|| a.id().cmp(&b.id()))
        });

        if request.order == SortOrder::Desc {
            entities.reverse();
        }

        let total = entities.len() as u64;
        let meta = PageMeta::new(request, total);

        let data = entities
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .map(|e| e.project())
            .collect();

        Ok(Page::new(data, meta))
    }

    /// Get an entity by id
    pub async fn find(&self, id: RecordId) -> Result<Option<E>, DomainError> {
        self.storage.get(id).await
    }

    /// Get a projection by id, consulting the cache first.
    ///
    /// A cache hit is returned as-is for its whole lifetime, even when the
    /// stored row changes underneath it, and regardless of the TTL the
    /// current request asked for. A miss loads from storage and stores the
    /// projection under the requested TTL; a zero TTL skips the store.
    pub async fn get_cached(
        &self,
        id: RecordId,
        ttl: Duration,
    ) -> Result<Option<E::Projection>, DomainError> {
        let key = entity_key(E::CACHE_NAMESPACE, id);

        if let Some(cached) = self.cache.get::<E::Projection>(&key).await? {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(Some(cached));
        }

        let Some(entity) = self.storage.get(id).await? else {
            return Ok(None);
        };

        let projection = entity.project();

        if !ttl.is_zero() {
            self.cache.set(&key, &projection, ttl).await?;
        }

        Ok(Some(projection))
    }

    /// Create a new entity
    pub async fn create(&self, entity: E) -> Result<E, DomainError> {
        self.storage.create(entity).await
    }

    /// Replace an existing entity
    pub async fn update(&self, entity: E) -> Result<E, DomainError> {
        self.storage.update(entity).await
    }

    /// Delete an entity by id, returning whether a row was removed
    pub async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    /// Check whether an entity exists
    pub async fn exists(&self, id: RecordId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }

    /// Count stored entities
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }

    /// Allocate the next record id
    pub async fn next_id(&self) -> Result<RecordId, DomainError> {
        self.storage.next_id().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::Author;
    use crate::domain::cache::MockCache;
    use crate::domain::storage::MockStorage;
    use chrono::NaiveDate;

    fn author(id: i64, name: &str) -> Author {
        Author::new(
            RecordId::new(id),
            name,
            None,
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        )
    }

    fn service_with(authors: Vec<Author>) -> ResourceService<Author> {
        let mut storage = MockStorage::new();
        for a in authors {
            storage = storage.with_entity(a);
        }
        ResourceService::new(Arc::new(storage), Arc::new(MockCache::new()))
    }

    #[tokio::test]
    async fn test_list_sorts_descending_by_default() {
        let service = service_with(vec![
            author(1, "Alice"),
            author(2, "Carol"),
            author(3, "Bob"),
        ]);

        let page = service.list(&PageRequest::default()).await.unwrap();

        let names: Vec<&str> = page.data.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_list_ascending() {
        let service = service_with(vec![author(1, "Carol"), author(2, "Alice")]);

        let request = PageRequest::new(SortOrder::Asc, 10, 1);
        let page = service.list(&request).await.unwrap();

        let names: Vec<&str> = page.data.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[tokio::test]
    async fn test_list_ties_break_on_id() {
        let service = service_with(vec![author(2, "Same"), author(1, "Same")]);

        let request = PageRequest::new(SortOrder::Asc, 10, 1);
        let page = service.list(&request).await.unwrap();

        let ids: Vec<i64> = page.data.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_pagination_meta() {
        let authors: Vec<Author> = (1..=25)
            .map(|i| author(i, &format!("Author {:02}", i)))
            .collect();
        let service = service_with(authors);

        let request = PageRequest::new(SortOrder::Asc, 10, 3);
        let page = service.list(&request).await.unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.meta.current_page, 3);
        assert_eq!(page.meta.per_page, 10);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.last_page, 3);
    }

    #[tokio::test]
    async fn test_list_page_past_end_is_empty() {
        let service = service_with(vec![author(1, "Alice")]);

        let request = PageRequest::new(SortOrder::Desc, 10, 5);
        let page = service.list(&request).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.meta.last_page, 1);
    }

    #[tokio::test]
    async fn test_list_where_filters() {
        let service = service_with(vec![author(1, "Alice"), author(2, "Bob")]);

        let request = PageRequest::new(SortOrder::Asc, 10, 1);
        let page = service
            .list_where(&request, |a| a.name() == "Bob")
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Bob");
        assert_eq!(page.meta.total, 1);
    }

    #[tokio::test]
    async fn test_get_cached_stores_on_miss() {
        let storage = MockStorage::new().with_entity(author(1, "Alice"));
        let cache = Arc::new(MockCache::new());
        let service = ResourceService::new(Arc::new(storage), cache.clone());

        let result = service
            .get_cached(RecordId::new(1), Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(result.unwrap().name, "Alice");
        assert_eq!(
            cache.stored_ttl("author:1"),
            Some(Duration::from_secs(3600))
        );
    }

    #[tokio::test]
    async fn test_get_cached_returns_stale_hit() {
        let storage = MockStorage::new().with_entity(author(1, "Updated Name"));
        let stale = author(1, "Original Name").project();
        let cache = Arc::new(
            MockCache::new().with_entry("author:1", &stale, Duration::from_secs(3600)),
        );
        let service = ResourceService::new(Arc::new(storage), cache);

        let result = service
            .get_cached(RecordId::new(1), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(result.unwrap().name, "Original Name");
    }

    #[tokio::test]
    async fn test_get_cached_hit_keeps_original_ttl() {
        let storage = MockStorage::new().with_entity(author(1, "Alice"));
        let cache = Arc::new(MockCache::new());
        let service = ResourceService::new(Arc::new(storage), cache.clone());

        service
            .get_cached(RecordId::new(1), Duration::from_secs(3600))
            .await
            .unwrap();
        service
            .get_cached(RecordId::new(1), Duration::from_secs(5))
            .await
            .unwrap();

        // The second request hit the cache, so the first TTL stands
        assert_eq!(
            cache.stored_ttl("author:1"),
            Some(Duration::from_secs(3600))
        );
    }

    #[tokio::test]
    async fn test_get_cached_zero_ttl_skips_store() {
        let storage = MockStorage::new().with_entity(author(1, "Alice"));
        let cache = Arc::new(MockCache::new());
        let service = ResourceService::new(Arc::new(storage), cache.clone());

        let result = service
            .get_cached(RecordId::new(1), Duration::ZERO)
            .await
            .unwrap();

        assert!(result.is_some());
        assert_eq!(cache.stored_ttl("author:1"), None);
    }

    #[tokio::test]
    async fn test_get_cached_zero_ttl_still_serves_existing_hit() {
        let storage = MockStorage::new().with_entity(author(1, "Current"));
        let stale = author(1, "Stale").project();
        let cache = Arc::new(
            MockCache::new().with_entry("author:1", &stale, Duration::from_secs(3600)),
        );
        let service = ResourceService::new(Arc::new(storage), cache);

        let result = service
            .get_cached(RecordId::new(1), Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(result.unwrap().name, "Stale");
    }

    #[tokio::test]
    async fn test_get_cached_missing_entity() {
        let service = service_with(vec![]);

        let result = service
            .get_cached(RecordId::new(99), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
