//! Middleware for Web API.

pub mod auth;
pub mod cors;

pub use auth::{AuthUser, JwtClaims, JwtState, OptionalAuthUser};
pub use cors::create_cors_layer;
