//! API error handling and the `{"message": ...}` response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{PostingsError, Resource};

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required body field is missing or has the wrong type (400).
    KeyError,
    /// The body is not valid JSON (400).
    JsonDecodeError,
    /// A query parameter could not be parsed (400).
    ValueError,
    /// A field failed its validation rules (400).
    ValidationError,
    /// A lookup matched more than one row (400).
    MultipleReturnError,
    /// Missing, malformed or expired token, or unknown user (401).
    InvalidToken,
    /// Authenticated user does not own the resource (401).
    InvalidUser,
    /// Category not found (404).
    CategoryDoesNotExist,
    /// Posting not found (404).
    PostingDoesNotExist,
    /// Comment not found (404).
    CommentDoesNotExist,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::KeyError
            | ErrorCode::JsonDecodeError
            | ErrorCode::ValueError
            | ErrorCode::ValidationError
            | ErrorCode::MultipleReturnError => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidToken | ErrorCode::InvalidUser => StatusCode::UNAUTHORIZED,
            ErrorCode::CategoryDoesNotExist
            | ErrorCode::PostingDoesNotExist
            | ErrorCode::CommentDoesNotExist => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every non-list response: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody<T: Serialize> {
    pub message: T,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Create a missing-field error.
    pub fn key_error() -> Self {
        Self::new(ErrorCode::KeyError)
    }

    /// Create a malformed-JSON error.
    pub fn json_decode() -> Self {
        Self::new(ErrorCode::JsonDecodeError)
    }

    /// Create a bad-query-value error.
    pub fn value_error() -> Self {
        Self::new(ErrorCode::ValueError)
    }

    /// Create a validation error.
    pub fn validation() -> Self {
        Self::new(ErrorCode::ValidationError)
    }

    /// Create an invalid token error.
    pub fn invalid_token() -> Self {
        Self::new(ErrorCode::InvalidToken)
    }

    /// Create a not-the-owner error.
    pub fn invalid_user() -> Self {
        Self::new(ErrorCode::InvalidUser)
    }

    /// Create a not found error for the given resource.
    pub fn not_found(resource: Resource) -> Self {
        match resource {
            Resource::Category => Self::new(ErrorCode::CategoryDoesNotExist),
            Resource::Posting => Self::new(ErrorCode::PostingDoesNotExist),
            Resource::Comment => Self::new(ErrorCode::CommentDoesNotExist),
            Resource::User => Self::invalid_token(),
        }
    }

    /// Create an internal server error.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        (status, Json(MessageBody { message: self.code })).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.code)
    }
}

impl std::error::Error for ApiError {}

impl From<PostingsError> for ApiError {
    fn from(err: PostingsError) -> Self {
        match err {
            PostingsError::NotFound(resource) => ApiError::not_found(resource),
            PostingsError::MultipleReturned(_) => ApiError::new(ErrorCode::MultipleReturnError),
            PostingsError::Permission(_) => ApiError::invalid_user(),
            PostingsError::Validation(_) => ApiError::validation(),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal()
            }
        }
    }
}

/// `{"message": "SUCCESS"}` with the given status.
#[derive(Debug, Clone, Copy)]
pub struct Success(pub StatusCode);

impl Success {
    /// 201 Created.
    pub fn created() -> Self {
        Self(StatusCode::CREATED)
    }

    /// 200 OK.
    pub fn ok() -> Self {
        Self(StatusCode::OK)
    }
}

impl IntoResponse for Success {
    fn into_response(self) -> Response {
        (self.0, Json(MessageBody { message: "SUCCESS" })).into_response()
    }
}
