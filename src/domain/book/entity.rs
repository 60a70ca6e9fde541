//! Book entity and projection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;
use crate::domain::storage::{RecordId, StorageEntity};

/// Fixed message for lookups that do not resolve to a book
pub const BOOK_NOT_FOUND: &str = "The requested book was not found.";

/// Fixed message returned by the delete endpoint
pub const BOOK_DELETED: &str = "Book has been deleted successfully";

/// Book entity as held in storage; always belongs to exactly one author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: RecordId,
    author_id: RecordId,
    title: String,
    description: Option<String>,
    publish_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(
        id: RecordId,
        author_id: RecordId,
        title: impl Into<String>,
        description: Option<String>,
        publish_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title: title.into(),
            description,
            publish_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn author_id(&self) -> RecordId {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Full-field replacement of the writable fields
    pub fn replace(
        &mut self,
        author_id: RecordId,
        title: impl Into<String>,
        description: Option<String>,
        publish_date: NaiveDate,
    ) {
        self.author_id = author_id;
        self.title = title.into();
        self.description = description;
        self.publish_date = publish_date;
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Book {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Book {
    type Projection = BookData;

    const CACHE_NAMESPACE: &'static str = "book";
    const NOT_FOUND_MESSAGE: &'static str = BOOK_NOT_FOUND;

    fn sort_key(&self) -> &str {
        &self.title
    }

    fn project(&self) -> BookData {
        BookData {
            id: self.id.as_i64(),
            author_id: self.author_id.as_i64(),
            title: self.title.clone(),
            description: self.description.clone(),
            publish_date: self.publish_date,
        }
    }
}

/// Minimal book field set returned by list and lookup endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookData {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub publish_date: NaiveDate,
}
