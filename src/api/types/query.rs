//! Custom query string extractor that returns errors as JSON

use axum::{
    extract::{FromRequestParts, Query as AxumQuery},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorBody;

/// Wrapper around `axum::extract::Query` that reports malformed query
/// strings as a 422 with the shared error body instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Query rejection error that returns API error format
#[derive(Debug)]
pub struct QueryRejection {
    message: String,
}

impl IntoResponse for QueryRejection {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            message: self.message,
            errors: None,
        };

        (StatusCode::UNPROCESSABLE_ENTITY, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => Err(QueryRejection {
                message: format!("Invalid query string: {}", rejection.body_text()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_rejection_into_response() {
        let rejection = QueryRejection {
            message: "Invalid query string: bad value".to_string(),
        };

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_query_deref() {
        let query = Query(7u32);
        assert_eq!(*query, 7);
    }
}
