use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{book::Book, error::ApiError, extractor::path::BookId, state::ApiState};

#[derive(Debug, Serialize)]
pub struct GetBookResponse {
    success: bool,
    data: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_book(
    BookId(id): BookId,
    State(state): State<ApiState>,
) -> Result<GetBookResponse, ApiError> {
    let book = state.books().get(id).await.ok_or(ApiError::BookNotFound)?;

    Ok(GetBookResponse {
        success: true,
        data: book,
    })
}
