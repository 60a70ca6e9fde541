//! Book endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::book::BOOK_DELETED;
use crate::domain::{Book, BookData, Page, RecordId, Resource};
use crate::infrastructure::services::BookInput;

use super::state::AppState;
use super::types::{
    ApiError, DataEnvelope, Json, ListParams, MessageResponse, Query, ShowParams,
};

/// Request body for creating or replacing a book
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookPayload {
    pub author_id: i64,
    #[validate(length(
        min = 1,
        max = 255,
        message = "The title must be between 1 and 255 characters."
    ))]
    pub title: String,
    #[validate(length(
        max = 5000,
        message = "The description may not be greater than 5000 characters."
    ))]
    pub description: Option<String>,
    pub publish_date: NaiveDate,
}

impl BookPayload {
    fn into_input(self) -> BookInput {
        BookInput {
            author_id: RecordId::new(self.author_id),
            title: self.title,
            description: self.description,
            publish_date: self.publish_date,
        }
    }
}

/// GET /api/books
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<BookData>>, ApiError> {
    params.validate().map_err(ApiError::from_validation)?;

    let request = params.page_request();

    tracing::debug!(page = request.page, limit = request.limit, "Listing books");

    let page = state.book_service.list(&request).await?;

    Ok(Json(page))
}

/// GET /api/books/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShowParams>,
) -> Result<Json<DataEnvelope<BookData>>, ApiError> {
    let book = state
        .book_service
        .get(RecordId::new(id), params.cache_duration())
        .await?
        .ok_or_else(|| ApiError::not_found(Book::NOT_FOUND_MESSAGE))?;

    Ok(Json(DataEnvelope::new(book)))
}

/// POST /api/books
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<DataEnvelope<BookData>>), ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let book = state.book_service.create(payload.into_input()).await?;

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(book))))
}

/// PUT /api/books/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<DataEnvelope<BookData>>, ApiError> {
    payload.validate().map_err(ApiError::from_validation)?;

    let book = state
        .book_service
        .update(RecordId::new(id), payload.into_input())
        .await?
        .ok_or_else(|| ApiError::not_found(Book::NOT_FOUND_MESSAGE))?;

    Ok(Json(DataEnvelope::new(book)))
}

/// DELETE /api/books/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.book_service.delete(RecordId::new(id)).await?;

    // Response is the same whether or not a row existed
    Ok(Json(MessageResponse::new(BOOK_DELETED)))
}
