//! Storage infrastructure - backend implementations

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageFactory, StorageType};
pub use in_memory::InMemoryStorage;
pub use postgres::{PostgresConfig, PostgresStorage};
