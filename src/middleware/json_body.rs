use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap},
    middleware::Next,
    response::Response,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::Value;

use crate::error::{ApiError, InternalServerError};

/// Maximum accepted size of a JSON request body in bytes.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// The parsed JSON request body, stored as a request extension by [`json_body`].
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// Middleware to parse `application/json` request bodies before any route is reached.
///
/// Rejects bodies that are not valid JSON, or whose top level is neither an object nor an array.
/// An empty body is accepted and leaves no [`JsonBody`] behind.
pub async fn json_body(req: Request, next: Next) -> Result<Response, ApiError> {
    if !is_json(req.headers()) {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let bytes = Limited::new(body, JSON_BODY_LIMIT)
        .collect()
        .await
        .map_err(|err| {
            if err.is::<LengthLimitError>() {
                tracing::warn!(limit = JSON_BODY_LIMIT, "Request body too large");

                return ApiError::PayloadTooLarge;
            }

            ApiError::from(InternalServerError::from_generic_error(anyhow::anyhow!(err)))
        })?
        .to_bytes();

    if !bytes.is_empty() {
        let value = serde_json::from_slice::<Value>(&bytes).map_err(|err| {
            tracing::warn!(%err, "Rejection");

            ApiError::InvalidJson
        })?;

        if !(value.is_object() || value.is_array()) {
            tracing::warn!("Rejection: top level JSON value must be an object or an array");

            return Err(ApiError::InvalidJson);
        }

        tracing::trace!(json = %value, "Parsed");

        parts.extensions.insert(JsonBody(value));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn detects_json_content_types() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("application/json; charset=utf-8")));
        assert!(is_json(&headers("Application/JSON")));
    }

    #[test]
    fn ignores_other_content_types() {
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json(&HeaderMap::new()));
    }
}
