//! Author endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::author::AUTHOR_DELETED;
use crate::domain::{Page, RecordId, Resource};
use crate::domain::{Author, AuthorData, AuthorWithBooks, BookData};
use crate::infrastructure::services::AuthorInput;

use super::state::AppState;
use super::types::{
    ApiError, DataEnvelope, Json, ListParams, MessageResponse, Query, ShowParams,
};

/// Request body for creating or replacing an author
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthorPayload {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name must be between 1 and 255 characters."
    ))]
    pub name: String,
    #[validate(length(max = 5000, message = "The bio may not be greater than 5000 characters."))]
    pub bio: Option<String>,
    pub birth_date: NaiveDate,
}

impl AuthorPayload {
    fn into_input(self) -> AuthorInput {
        AuthorInput {
            name: self.name,
            bio: self.bio,
            birth_date: self.birth_date,
        }
    }
}

/// GET /api/authors
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<AuthorData>>, ApiError> {
    params.validate().map_err(ApiError::from_validation)?;

    let request = params.page_request();

    tracing::debug!(page = request.page, limit = request.limit, "Listing authors");

    let page = state.author_service.list(&request).await?;

    Ok(Json(page))
}

/// GET /api/authors/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShowParams>,
) -> Result<Json<DataEnvelope<AuthorData>>, ApiError> {
    let author = state
        .author_service
        .get(RecordId::new(id), params.cache_duration())
        .await?
        .ok_or_else(|| ApiError::not_found(Author::NOT_FOUND_MESSAGE))?;

    Ok(Json(DataEnvelope::new(author)))
}

/// GET /api/authors/{id}/book
pub async fn show_with_books(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShowParams>,
) -> Result<Json<DataEnvelope<AuthorWithBooks>>, ApiError> {
    let author = state
        .author_service
        .get_with_books(RecordId::new(id), params.cache_duration())
        .await?
        .ok_or_else(|| ApiError::not_found(Author::NOT_FOUND_MESSAGE))?;

    Ok(Json(DataEnvelope::new(author)))
}

/// GET /api/authors/{id}/books
pub async fn list_books(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<BookData>>, ApiError> {
    params.validate().map_err(ApiError::from_validation)?;

    let author_id = RecordId::new(id);

    if !state.author_service.exists(author_id).await? {
        return Err(ApiError::not_found(Author::NOT_FOUND_MESSAGE));
    }

    let page = state
        .book_service
        .list_by_author(author_id, &params.page_request())
        .await?;

    Ok(Json(page))
}

/// POST /api/authors
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AuthorPayload>,
) -> Result<(StatusCode, Json<DataEnvelope<AuthorData>>), ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let author = state.author_service.create(payload.into_input()).await?;

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(author))))
}

/// PUT /api/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AuthorPayload>,
) -> Result<Json<DataEnvelope<AuthorData>>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let author = state
        .author_service
        .update(RecordId::new(id), payload.into_input())
        .await?
        .ok_or_else(|| ApiError::not_found(Author::NOT_FOUND_MESSAGE))?;

    Ok(Json(DataEnvelope::new(author)))
}

/// DELETE /api/authors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.author_service.delete(RecordId::new(id)).await?;

    // Response is the same whether or not a row existed
    Ok(Json(MessageResponse::new(AUTHOR_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserializes() {
        let payload: AuthorPayload = serde_json::from_str(
            r#"{"name": "Ursula K. Le Guin", "bio": null, "birth_date": "1929-10-21"}"#,
        )
        .unwrap();

        assert_eq!(payload.name, "Ursula K. Le Guin");
        assert!(payload.bio.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_payload_rejects_empty_name() {
        let payload: AuthorPayload =
            serde_json::from_str(r#"{"name": "", "birth_date": "1929-10-21"}"#).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_payload_rejects_oversized_name() {
        let payload = AuthorPayload {
            name: "x".repeat(256),
            bio: None,
            birth_date: NaiveDate::from_ymd_opt(1929, 10, 21).unwrap(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_missing_birth_date_fails_deserialization() {
        assert!(serde_json::from_str::<AuthorPayload>(r#"{"name": "A"}"#).is_err());
    }
}
