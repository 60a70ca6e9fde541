//! Storage abstraction - entity and repository traits

mod entity;
mod repository;

pub use entity::{RecordId, StorageEntity};
pub use repository::Storage;

#[cfg(test)]
pub use repository::mock::MockStorage;
