use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::authors;
use super::books;
use super::health;
use super::state::AppState;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Resource API
        .nest("/api", create_api_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/authors", get(authors::list).post(authors::create))
        .route(
            "/authors/{id}",
            get(authors::show)
                .put(authors::update)
                .delete(authors::delete),
        )
        .route("/authors/{id}/book", get(authors::show_with_books))
        .route("/authors/{id}/books", get(authors::list_books))
        .route("/books", get(books::list).post(books::create))
        .route(
            "/books/{id}",
            get(books::show).put(books::update).delete(books::delete),
        )
}
