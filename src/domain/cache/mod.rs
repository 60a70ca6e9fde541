//! Cache abstraction - trait, typed helpers, and key derivation

mod key;
mod repository;

pub use key::{entity_key, entity_key_with};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
