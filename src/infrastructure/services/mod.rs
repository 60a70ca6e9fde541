//! Application services built on the storage and cache abstractions

mod author_service;
mod book_service;
mod resource_service;

pub use author_service::{AuthorInput, AuthorService};
pub use book_service::{BookInput, BookService};
pub use resource_service::ResourceService;
