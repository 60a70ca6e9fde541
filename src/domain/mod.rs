//! Domain layer - Core entities and abstractions

pub mod author;
pub mod book;
pub mod cache;
pub mod error;
pub mod page;
pub mod resource;
pub mod storage;

pub use author::{Author, AuthorData, AuthorWithBooks};
pub use book::{Book, BookData};
pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use page::{Page, PageMeta, PageRequest, SortOrder};
pub use resource::Resource;
pub use storage::{RecordId, Storage, StorageEntity};
