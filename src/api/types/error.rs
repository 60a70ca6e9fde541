//! API error responses

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON body returned for every error response.
///
/// Validation failures carry a per-field `errors` map; everything else
/// is just a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                message: message.into(),
                errors: None,
            },
        }
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Unprocessable entity error without field detail
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Unprocessable entity error with a per-field error map
    pub fn unprocessable_fields(
        message: impl Into<String>,
        errors: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ApiErrorBody {
                message: message.into(),
                errors: Some(errors),
            },
        }
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Build a 422 response from validator output
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field),
                })
                .collect();

            fields.insert(field.to_string(), messages);
        }

        Self::unprocessable_fields("The given data was invalid.", fields)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message, field } => match field {
                Some(field) => {
                    let mut errors = BTreeMap::new();
                    errors.insert(field, vec![message]);
                    Self::unprocessable_fields("The given data was invalid.", errors)
                }
                None => Self::unprocessable(message),
            },
            DomainError::Conflict { message } => Self::new(StatusCode::CONFLICT, message),
            DomainError::Configuration { message }
            | DomainError::Internal { message }
            | DomainError::Storage { message }
            | DomainError::Cache { message } => {
                tracing::error!(error = %message, "Request failed");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ApiError::not_found("The requested author was not found.");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.message, "The requested author was not found.");
        assert!(err.body.errors.is_none());
    }

    #[test]
    fn test_domain_not_found_conversion() {
        let err: ApiError = DomainError::not_found("Missing").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_validation_with_field() {
        let err: ApiError =
            DomainError::validation_field("author_id", "The selected author_id is invalid.")
                .into();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body.message, "The given data was invalid.");
        let errors = err.body.errors.unwrap();
        assert_eq!(
            errors["author_id"],
            vec!["The selected author_id is invalid."]
        );
    }

    #[test]
    fn test_storage_error_is_masked() {
        let err: ApiError = DomainError::storage("connection refused").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "Internal server error");
    }

    #[test]
    fn test_error_body_serialization_skips_empty_errors() {
        let err = ApiError::not_found("Missing");
        let json = serde_json::to_value(&err.body).unwrap();
        assert!(json.get("errors").is_none());
    }
}
