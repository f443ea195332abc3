use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{book::Book, error::ApiError, extractor::json::JsonPayload, state::ApiState};

use super::BookPayload;

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    success: bool,
    message: &'static str,
    data: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

pub async fn create_book(
    State(state): State<ApiState>,
    JsonPayload(payload): JsonPayload<BookPayload>,
) -> Result<CreateBookResponse, ApiError> {
    let Some(new_book) = payload.into_new_book() else {
        tracing::warn!("Title or author missing");

        return Err(ApiError::MissingFields);
    };

    let book = state.books().create(new_book).await;

    Ok(CreateBookResponse {
        success: true,
        message: "Book created successfully",
        data: book,
    })
}
