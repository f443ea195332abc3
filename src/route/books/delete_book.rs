use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{book::Book, error::ApiError, extractor::path::BookId, state::ApiState};

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    success: bool,
    message: &'static str,
    data: Book,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn delete_book(
    BookId(id): BookId,
    State(state): State<ApiState>,
) -> Result<DeleteBookResponse, ApiError> {
    let book = state
        .books()
        .delete(id)
        .await
        .ok_or(ApiError::BookNotFound)?;

    Ok(DeleteBookResponse {
        success: true,
        message: "Book deleted successfully",
        data: book,
    })
}
