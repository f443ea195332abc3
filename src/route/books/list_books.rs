use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{book::Book, state::ApiState};

#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    success: bool,
    data: Vec<Book>,
    count: usize,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn list_books(State(state): State<ApiState>) -> ListBooksResponse {
    let books = state.books().list().await;

    ListBooksResponse {
        success: true,
        count: books.len(),
        data: books,
    }
}
