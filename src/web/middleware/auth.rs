//! Bearer token authentication.
//!
//! Tokens are HS256 JWTs whose `sub` claim is the user ID. Issuing them is
//! left to an external service; this module only verifies them.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::db::{User, UserRepository};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// JWT claims structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
}

/// Key and validation settings for verifying tokens.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key for JWT verification.
    pub decoding_key: DecodingKey,
    /// Validation settings.
    pub validation: Validation,
}

impl JwtState {
    /// Create a new JWT state from a secret key.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn decode(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

impl std::fmt::Debug for JwtState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtState")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

/// Resolve the bearer token of a request to a user.
///
/// Returns None for a missing, malformed, invalid or expired token, and for
/// a token naming a user that does not exist.
async fn resolve_user(parts: &mut Parts, state: &Arc<AppState>) -> Result<Option<User>, ApiError> {
    let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    else {
        return Ok(None);
    };

    let claims = match state.jwt.decode(bearer.token()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            return Ok(None);
        }
    };

    let user = UserRepository::new(state.db.pool())
        .get_by_id(claims.sub)
        .await?;
    if user.is_none() {
        tracing::debug!(user_id = claims.sub, "Token names an unknown user");
    }
    Ok(user)
}

/// Extractor for authenticated users.
///
/// Rejects with `INVALID_TOKEN` unless the request carries a valid token for
/// an existing user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(parts, state)
            .await?
            .map(AuthUser)
            .ok_or_else(ApiError::invalid_token)
    }
}

/// Optional authentication extractor.
///
/// Similar to AuthUser but yields None instead of rejecting.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<User>);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(resolve_user(parts, state).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn create_test_token(secret: &str, claims: &JwtClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(exp_offset: i64) -> JwtClaims {
        let now = chrono::Utc::now().timestamp();
        JwtClaims {
            sub: 1,
            iat: now as u64,
            exp: (now + exp_offset) as u64,
        }
    }

    #[test]
    fn test_jwt_state_new() {
        let state = JwtState::new("test-secret");
        assert!(state.validation.validate_exp);
        assert_eq!(state.validation.algorithms, vec![Algorithm::HS256]);
    }

    #[test]
    fn test_create_and_verify_token() {
        let state = JwtState::new("test-secret");
        let token = create_test_token("test-secret", &claims(3600));

        let decoded = state.decode(&token).unwrap();
        assert_eq!(decoded.sub, 1);
    }

    #[test]
    fn test_expired_token() {
        let state = JwtState::new("test-secret");
        // Expired 1 hour ago
        let token = create_test_token("test-secret", &claims(-3600));
        assert!(state.decode(&token).is_err());
    }

    #[test]
    fn test_invalid_secret() {
        let token = create_test_token("secret1", &claims(3600));
        let state = JwtState::new("secret2");
        assert!(state.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_token() {
        let state = JwtState::new("test-secret");
        assert!(state.decode("not.a.jwt").is_err());
        assert!(state.decode("").is_err());
    }
}
