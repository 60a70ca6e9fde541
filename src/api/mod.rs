//! API layer - HTTP endpoints, extractors and shared types

pub mod authors;
pub mod books;
pub mod health;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_router, create_router_with_state};
pub use state::AppState;
