//! Author entity and projections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::book::BookData;
use crate::domain::resource::Resource;
use crate::domain::storage::{RecordId, StorageEntity};

/// Fixed message for lookups that do not resolve to an author
pub const AUTHOR_NOT_FOUND: &str = "The requested author was not found.";

/// Fixed message returned by the delete endpoint
pub const AUTHOR_DELETED: &str = "Author has been deleted successfully";

/// Author entity as held in storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: RecordId,
    name: String,
    bio: Option<String>,
    birth_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Author {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        bio: Option<String>,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            bio,
            birth_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Full-field replacement of the writable fields
    pub fn replace(&mut self, name: impl Into<String>, bio: Option<String>, birth_date: NaiveDate) {
        self.name = name.into();
        self.bio = bio;
        self.birth_date = birth_date;
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Author {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Author {
    type Projection = AuthorData;

    const CACHE_NAMESPACE: &'static str = "author";
    const NOT_FOUND_MESSAGE: &'static str = AUTHOR_NOT_FOUND;

    fn sort_key(&self) -> &str {
        &self.name
    }

    fn project(&self) -> AuthorData {
        AuthorData {
            id: self.id.as_i64(),
            name: self.name.clone(),
            bio: self.bio.clone(),
            birth_date: self.birth_date,
        }
    }
}

/// Minimal author field set returned by list and lookup endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorData {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: NaiveDate,
}

/// Author projection joined with the author's books, cached under a
/// distinct key suffix so it never collides with the plain projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorWithBooks {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: NaiveDate,
    pub books: Vec<BookData>,
}

impl AuthorWithBooks {
    pub fn new(author: &Author, books: Vec<BookData>) -> Self {
        Self {
            id: author.id.as_i64(),
            name: author.name.clone(),
            bio: author.bio.clone(),
            birth_date: author.birth_date,
            books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1994, 5, 3).unwrap()
    }

    #[test]
    fn test_new_author_sets_timestamps() {
        let author = Author::new(RecordId::new(1), "Napoleon Hill", None, birth_date());

        assert_eq!(author.id(), RecordId::new(1));
        assert_eq!(author.name(), "Napoleon Hill");
        assert!(author.bio().is_none());
        assert_eq!(author.created_at(), author.updated_at());
    }

    #[test]
    fn test_replace_refreshes_updated_at() {
        let mut author = Author::new(RecordId::new(1), "Old Name", None, birth_date());
        let created = author.created_at();

        author.replace("New Name", Some("A bio".to_string()), birth_date());

        assert_eq!(author.name(), "New Name");
        assert_eq!(author.bio(), Some("A bio"));
        assert_eq!(author.created_at(), created);
        assert!(author.updated_at() >= created);
    }

    #[test]
    fn test_projection_excludes_bookkeeping_fields() {
        let author = Author::new(RecordId::new(3), "Jane Austen", None, birth_date());

        let json = serde_json::to_value(author.project()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Jane Austen");
        assert_eq!(json["bio"], serde_json::Value::Null);
        assert_eq!(json["birth_date"], "1994-05-03");
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_sort_key_is_name() {
        let author = Author::new(RecordId::new(1), "George Orwell", None, birth_date());
        assert_eq!(author.sort_key(), "George Orwell");
    }
}
