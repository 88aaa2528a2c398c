//! Body, path and query extractors that reject with API error codes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// The body is read as JSON regardless of `Content-Type`. Malformed JSON, or
/// JSON whose top level is not an object, is rejected with
/// `JSON_DECODE_ERROR`. A missing or mistyped field gives `KEY_ERROR` and a
/// rule violation gives `VALIDATION_ERROR`.
///
/// # Example
///
/// ```ignore
/// async fn create_posting(
///     JsonBody(payload): JsonBody<CreatePostingRequest>,
/// ) -> Result<Success, ApiError> {
///     // payload is already validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            ApiError::json_decode()
        })?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|_| ApiError::json_decode())?;
        if !value.is_object() {
            return Err(ApiError::json_decode());
        }

        let payload: T = serde_json::from_value(value).map_err(|e| {
            tracing::debug!("Request body rejected: {}", e);
            ApiError::key_error()
        })?;

        payload.validate().map_err(|e| {
            tracing::debug!("Validation failed: {}", e);
            ApiError::validation()
        })?;

        Ok(JsonBody(payload))
    }
}

/// Query string extractor rejecting unparsable values with `VALUE_ERROR`.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Query rejected: {}", e);
                ApiError::value_error()
            })?;
        Ok(QueryParams(params))
    }
}

/// Path parameter extractor rejecting unparsable segments with `VALUE_ERROR`.
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(param) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Path rejected: {}", e);
                ApiError::value_error()
            })?;
        Ok(PathParam(param))
    }
}

/// Validate that a string does not contain control characters or NULL bytes.
pub fn no_control_chars(value: &str) -> Result<(), validator::ValidationError> {
    if value
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(validator::ValidationError::new("no_control_chars")
            .with_message("Must not contain control characters".into()));
    }
    Ok(())
}
