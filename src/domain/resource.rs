//! Resource descriptor for entities served through the paginated
//! resource service
//!
//! Authors and books follow an identical list/lookup/mutate shape; the
//! descriptor captures everything that differs between them so the
//! service logic exists once.

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::storage::StorageEntity;

/// Descriptor for an entity type exposed over the REST surface
pub trait Resource: StorageEntity {
    /// Minimal field set returned by list and lookup endpoints
    type Projection: Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned;

    /// Namespace used to derive cache keys, e.g. `author`
    const CACHE_NAMESPACE: &'static str;

    /// Fixed message returned when no record matches an identifier
    const NOT_FOUND_MESSAGE: &'static str;

    /// Value list pages are ordered by (the human-readable field,
    /// with id as tie-breaker)
    fn sort_key(&self) -> &str;

    /// Projects the entity to its minimal field set
    fn project(&self) -> Self::Projection;
}
