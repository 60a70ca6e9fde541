//! Book service - CRUD operations with author referential checks

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::{
    Author, Book, BookData, Cache, DomainError, Page, PageRequest, RecordId, Resource,
};

use super::ResourceService;

/// Fields accepted when creating or replacing a book
#[derive(Debug, Clone)]
pub struct BookInput {
    pub author_id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub publish_date: NaiveDate,
}

/// Book service for CRUD operations
#[derive(Debug, Clone)]
pub struct BookService {
    resource: ResourceService<Book>,
    authors: Arc<dyn Storage<Author>>,
}

impl BookService {
    /// Create a new BookService
    pub fn new(
        books: Arc<dyn Storage<Book>>,
        authors: Arc<dyn Storage<Author>>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            resource: ResourceService::new(books, cache),
            authors,
        }
    }

    /// List a page of books sorted by title
    pub async fn list(&self, request: &PageRequest) -> Result<Page<BookData>, DomainError> {
        self.resource.list(request).await
    }

    /// List a page of one author's books sorted by title
    pub async fn list_by_author(
        &self,
        author_id: RecordId,
        request: &PageRequest,
    ) -> Result<Page<BookData>, DomainError> {
        self.resource
            .list_where(request, |b| b.author_id() == author_id)
            .await
    }

    /// Get a book projection by id, served from the cache when possible
    pub async fn get(
        &self,
        id: RecordId,
        cache_duration: Duration,
    ) -> Result<Option<BookData>, DomainError> {
        self.resource.get_cached(id, cache_duration).await
    }

    /// Create a new book after checking the author exists
    pub async fn create(&self, input: BookInput) -> Result<BookData, DomainError> {
        self.ensure_author(input.author_id).await?;

        let id = self.resource.next_id().await?;
        let book = Book::new(
            id,
            input.author_id,
            input.title,
            input.description,
            input.publish_date,
        );

        let created = self.resource.create(book).await?;

        tracing::info!(id = %created.id(), author_id = %input.author_id, "Book created");

        Ok(created.project())
    }

    /// Replace an existing book, returning None if it does not exist
    pub async fn update(
        &self,
        id: RecordId,
        input: BookInput,
    ) -> Result<Option<BookData>, DomainError> {
        let Some(mut book) = self.resource.find(id).await? else {
            return Ok(None);
        };

        self.ensure_author(input.author_id).await?;

        book.replace(
            input.author_id,
            input.title,
            input.description,
            input.publish_date,
        );
        let updated = self.resource.update(book).await?;

        tracing::info!(id = %id, "Book updated");

        Ok(Some(updated.project()))
    }

    /// Delete a book by id, returning whether a row was removed
    pub async fn delete(&self, id: RecordId) -> Result<bool, DomainError> {
        let deleted = self.resource.delete(id).await?;

        if deleted {
            tracing::info!(id = %id, "Book deleted");
        }

        Ok(deleted)
    }

    /// Count stored books
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.resource.count().await
    }

    async fn ensure_author(&self, author_id: RecordId) -> Result<(), DomainError> {
        if self.authors.exists(author_id).await? {
            return Ok(());
        }

        Err(DomainError::validation_field(
            "author_id",
            "The selected author_id is invalid.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortOrder;
    use crate::domain::cache::MockCache;
    use crate::domain::storage::MockStorage;

    fn author(id: i64, name: &str) -> Author {
        Author::new(
            RecordId::new(id),
            name,
            None,
            NaiveDate::from_ymd_opt(1950, 6, 15).unwrap(),
        )
    }

    fn book(id: i64, author_id: i64, title: &str) -> Book {
        Book::new(
            RecordId::new(id),
            RecordId::new(author_id),
            title,
            None,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        )
    }

    fn input(author_id: i64, title: &str) -> BookInput {
        BookInput {
            author_id: RecordId::new(author_id),
            title: title.to_string(),
            description: None,
            publish_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        }
    }

    fn service(books: MockStorage<Book>, authors: MockStorage<Author>) -> BookService {
        BookService::new(
            Arc::new(books),
            Arc::new(authors),
            Arc::new(MockCache::new()),
        )
    }

    #[tokio::test]
    async fn test_create_with_known_author() {
        let service = service(MockStorage::new(), MockStorage::new().with_entity(author(1, "Alice")));

        let created = service.create(input(1, "First Book")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.author_id, 1);
        assert_eq!(created.title, "First Book");
    }

    #[tokio::test]
    async fn test_create_with_unknown_author() {
        let service = service(MockStorage::new(), MockStorage::new());

        let err = service.create(input(99, "Orphan")).await.unwrap_err();

        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("author_id"));
                assert_eq!(message, "The selected author_id is invalid.");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_with_unknown_author() {
        let service = service(
            MockStorage::new().with_entity(book(1, 1, "A Book")),
            MockStorage::new().with_entity(author(1, "Alice")),
        );

        let err = service
            .update(RecordId::new(1), input(99, "Renamed"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let service = service(
            MockStorage::new(),
            MockStorage::new().with_entity(author(1, "Alice")),
        );

        let result = service
            .update(RecordId::new(42), input(1, "Ghost"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_can_reassign_author() {
        let service = service(
            MockStorage::new().with_entity(book(1, 1, "A Book")),
            MockStorage::new()
                .with_entity(author(1, "Alice"))
                .with_entity(author(2, "Bob")),
        );

        let updated = service
            .update(RecordId::new(1), input(2, "A Book"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.author_id, 2);
    }

    #[tokio::test]
    async fn test_list_by_author_filters_and_sorts() {
        let service = service(
            MockStorage::new()
                .with_entity(book(1, 1, "Zebra Tales"))
                .with_entity(book(2, 1, "Aardvark Diaries"))
                .with_entity(book(3, 2, "Unrelated")),
            MockStorage::new().with_entity(author(1, "Alice")),
        );

        let request = PageRequest::new(SortOrder::Asc, 10, 1);
        let page = service
            .list_by_author(RecordId::new(1), &request)
            .await
            .unwrap();

        let titles: Vec<&str> = page.data.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Aardvark Diaries", "Zebra Tales"]);
        assert_eq!(page.meta.total, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_book_reports_false() {
        let service = service(MockStorage::new(), MockStorage::new());

        assert!(!service.delete(RecordId::new(7)).await.unwrap());
    }
}
