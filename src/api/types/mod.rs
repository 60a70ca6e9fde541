//! Shared API types - errors, extractors, envelopes and parameters

mod envelope;
mod error;
mod json;
mod params;
mod query;

pub use envelope::{DataEnvelope, MessageResponse};
pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
pub use params::{ListParams, ShowParams, DEFAULT_CACHE_DURATION_SECS};
pub use query::Query;
