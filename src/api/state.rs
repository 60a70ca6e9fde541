//! Shared application state for API handlers

use std::sync::Arc;

use crate::domain::Cache;
use crate::infrastructure::services::{AuthorService, BookService};

/// Application state shared across all routes
#[derive(Debug, Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub book_service: Arc<BookService>,
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    pub fn new(
        author_service: Arc<AuthorService>,
        book_service: Arc<BookService>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            author_service,
            book_service,
            cache,
        }
    }
}
