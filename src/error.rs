//! Error types for the postings service.

use std::fmt;

use thiserror::Error;

/// Kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Category,
    Posting,
    Comment,
}

impl Resource {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Category => "category",
            Resource::Posting => "posting",
            Resource::Comment => "comment",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common error type for the postings service.
#[derive(Error, Debug)]
pub enum PostingsError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced record does not exist.
    #[error("{0} not found")]
    NotFound(Resource),

    /// A lookup that should match one row matched several.
    #[error("multiple {0} rows returned")]
    MultipleReturned(Resource),

    /// Acting user does not own the record.
    #[error("permission denied: {0}")]
    Permission(String),
}

impl From<sqlx::Error> for PostingsError {
    fn from(e: sqlx::Error) -> Self {
        PostingsError::Database(e.to_string())
    }
}

/// Result type alias for postings operations.
pub type Result<T> = std::result::Result<T, PostingsError>;
