use crate::error::ApiError;

/// Fallback for paths that match neither a route nor a static file.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
