//! Author service - CRUD operations and the books relation

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::cache::{entity_key_with, Cache, CacheExt};
use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::{
    Author, AuthorData, AuthorWithBooks, Book, BookData, DomainError, Page, PageRequest, RecordId,
    Resource,
};

use super::ResourceService;

/// Fields accepted when creating or replacing an author
#[derive(Debug, Clone)]
pub struct AuthorInput {
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: NaiveDate,
}

/// Author service for CRUD operations
#[derive(Debug, Clone)]
pub struct AuthorService {
    resource: ResourceService<Author>,
    books: Arc<dyn Storage<Book>>,
    cache: Arc<dyn Cache>,
}

impl AuthorService {
    /// Create a new AuthorService
    pub fn new(
        authors: Arc<dyn Storage<Author>>,
        books: Arc<dyn Storage<Book>>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            resource: ResourceService::new(authors, cache.clone()),
            books,
            cache,
        }
    }

    /// List a page of authors sorted by name
    pub async fn list(&self, request: &PageRequest) -> Result<Page<AuthorData>, DomainError> {
        self.resource.list(request).await
    }

    /// Get an author projection by id, served from the cache when possible
    pub async fn get(
        &self,
        id: RecordId,
        cache_duration: Duration,
    ) -> Result<Option<AuthorData>, DomainError> {
        self.resource.get_cached(id, cache_duration).await
    }

    /// Get an author together with all of their books, sorted by title.
    ///
    /// The combined shape is cached under its own key so it never collides
    /// with the plain author projection.
    pub async fn get_with_books(
        &self,
        id: RecordId,
        cache_duration: Duration,
    ) -> Result<Option<AuthorWithBooks>, DomainError> {
        let key = entity_key_with(Author::CACHE_NAMESPACE, id, "books");

        if let Some(cached) = self.cache.get::<AuthorWithBooks>(&key).await? {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(Some(cached));
        }

        let Some(author) = self.resource.find(id).await? else {
            return Ok(None);
        };

        let mut books: Vec<Book> = self
            .books
            .list()
            .await?
            .into_iter()
            .filter(|b| b.author_id() == id)
            .collect();
        books.sort_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(&b.id())));

        let book_data: Vec<BookData> = books.iter().map(|b| b.project()).collect();
        let combined = AuthorWithBooks::new(&author, book_data);

        if !cache_duration.is_zero() {
            self.cache.set(&key, &combined, cache_duration).await?;
        }

        Ok(Some(combined))
    }

    /// Create a new author
    pub async fn create(&self, input: AuthorInput) -> Result<AuthorData, DomainError> {
        let id = self.resource.next_id().await?;
        let author = Author::new(id, input.name, input.bio, input.birth_date);

        let created = self.resource.create(author).await?;

        tracing::info!(id = %created.id(), "Author created");

        Ok(created.project())
    }

    /// Replace an existing author, returning None if it does not exist
    pub async fn update(
        &self,
        id: RecordId,
        input: AuthorInput,
    ) -> Result<Option<AuthorData>, DomainError> {
        let Some(mut author) = self.resource.find(id).await? else {
            return Ok(None);
        };

        author.replace(input.name, input.bio, input.birth_date);
        let updated = self.resource.update(author).await?;

        tracing::info!(id = %id, "Author updated");

        Ok(Some(updated.project()))
    }

    /// Delete an author and all of their books.
    ///
    /// Deleting an id that does not exist is not an error; the result
    /// reports whether a row was actually removed.
    pub async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        let owned: Vec<RecordId> = self
            .books
            .list()
            .await?
            .into_iter()
            .filter(|b| b.author_id() == id)
            .map(|b| b.id())
            .collect();

        for book_id in owned {
            self.books.delete(book_id).await?;
        }

        let deleted = self.resource.delete(id).await?;

        if deleted {
            tracing::info!(id = %id, "Author deleted");
        }

        Ok(deleted)
    }

    /// Check whether an author exists, reading storage directly
    pub async fn exists(&self, id: RecordId) -> Result<bool, DomainError> {
        self.resource.exists(id).await
    }

    /// Count stored authors
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.resource.count().await
    }
}
