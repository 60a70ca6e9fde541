//! Book domain types

mod entity;

pub use entity::{BOOK_DELETED, BOOK_NOT_FOUND, Book, BookData};
