use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    success: bool,
    message: String,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// API error
///
/// The `Display` output of each variant is the message returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body claims to be JSON but does not parse.
    #[error("Invalid JSON format")]
    InvalidJson,
    /// The JSON request body exceeds [`crate::middleware::json_body::JSON_BODY_LIMIT`].
    #[error("Request entity too large")]
    PayloadTooLarge,
    /// `title` or `author` is missing from a create request.
    #[error("Title and author are required")]
    MissingFields,
    #[error("Book not found")]
    BookNotFound,
    /// Neither an API route nor a static file matched.
    #[error("Route not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Details are logged when the error is created and never sent to the client.
    #[error("Internal server error")]
    InternalServerError(#[from] InternalServerError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BookNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        ApiErrorResponse {
            success: false,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        (status_code, ApiErrorResponse::from(self)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct InternalServerError {
    reason: String,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(err: E) -> Self {
        let err: anyhow::Error = err.into();
        let reason = format!("{err:#}");
        tracing::error!(err = %reason, "Internal server error");

        InternalServerError { reason }
    }
}

/// Maps a panic caught by [`tower_http::catch_panic::CatchPanicLayer`] to an [`ApiError`] response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    let err = anyhow::anyhow!(details).context("Handler panicked");

    ApiError::from(InternalServerError::from_generic_error(err)).into_response()
}
