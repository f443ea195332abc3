use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    book::Book,
    error::ApiError,
    extractor::{json::JsonPayload, path::BookId},
    state::ApiState,
};

use super::BookPayload;

#[derive(Debug, Serialize)]
pub struct UpdateBookResponse {
    success: bool,
    message: &'static str,
    data: Book,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Overwrites only the fields present in the payload. This is not a full replace.
pub async fn update_book(
    BookId(id): BookId,
    State(state): State<ApiState>,
    JsonPayload(payload): JsonPayload<BookPayload>,
) -> Result<UpdateBookResponse, ApiError> {
    let book = state
        .books()
        .update(id, payload.into_changes())
        .await
        .ok_or(ApiError::BookNotFound)?;

    Ok(UpdateBookResponse {
        success: true,
        message: "Book updated successfully",
        data: book,
    })
}
