//! Author domain types

mod entity;

pub use entity::{AUTHOR_DELETED, AUTHOR_NOT_FOUND, Author, AuthorData, AuthorWithBooks};
