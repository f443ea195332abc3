use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

use crate::{error::ApiError, middleware::json_body::JsonBody};

/// Typed view of the request body validated by [`crate::middleware::json_body::json_body`].
///
/// A request without a JSON body, or whose JSON body is not an object, yields `T::default()`.
/// Does not consume the request body.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for JsonPayload<T>
where
    T: DeserializeOwned + Default + Debug + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_payload_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let payload = match parts.extensions.get::<JsonBody>() {
            Some(JsonBody(value @ Value::Object(_))) => {
                serde_json::from_value::<T>(value.clone()).map_err(|err| {
                    tracing::warn!(%err, "Rejection");

                    ApiError::InvalidJson
                })?
            }
            _ => T::default(),
        };

        tracing::trace!(?payload, "Extracted");

        Ok(JsonPayload(payload))
    }
}
