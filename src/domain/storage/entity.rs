//! Storage entity traits and types

use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Numeric record identifier, allocated by the storage backend on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for types that can be stored
pub trait StorageEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Returns the entity's identifier
    fn id(&self) -> RecordId;
}
