//! API handlers and shared state.

pub mod comment;
pub mod posting;

pub use comment::*;
pub use posting::*;

use crate::config::Config;
use crate::datetime::DateTimeFormatter;
use crate::web::middleware::JwtState;
use crate::Database;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Database,
    /// Token verification settings.
    pub jwt: JwtState,
    /// Renders `created_at` values in responses.
    pub formatter: DateTimeFormatter,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, formatter: DateTimeFormatter) -> Self {
        Self {
            db,
            jwt: JwtState::new(jwt_secret),
            formatter,
        }
    }

    /// Create application state from configuration.
    pub fn from_config(db: Database, config: &Config) -> Self {
        Self::new(
            db,
            &config.auth.jwt_secret,
            DateTimeFormatter::new(&config.display.timezone, &config.display.datetime_format),
        )
    }
}
