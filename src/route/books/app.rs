use axum::{routing::get, Router};

use crate::state::ApiState;

use super::{create_book, delete_book, get_book, list_books, update_book};

/// Each path is also served with a trailing slash.
pub fn app() -> Router<ApiState> {
    let collection = get(list_books::list_books).post(create_book::create_book);
    let item = get(get_book::get_book)
        .put(update_book::update_book)
        .delete(delete_book::delete_book);

    Router::<ApiState>::new()
        .route("/books", collection.clone())
        .route("/books/", collection)
        .route("/books/:id", item.clone())
        .route("/books/:id/", item)
}
