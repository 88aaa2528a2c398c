//! Test helpers for Web API integration tests.
//!
//! Provides a router-backed TestServer over an in-memory database, user and
//! category fixtures, and token minting.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};

use postings::datetime::DateTimeFormatter;
use postings::db::{CategoryRepository, NewUser, UserRepository};
use postings::posting::{NewPosting, PostingRepository};
use postings::web::middleware::JwtClaims;
use postings::web::{create_router, AppState};
use postings::Database;

/// Secret shared by the test server and minted tokens.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// A running test server and handles into its state.
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
}

impl TestApp {
    /// Create a test server with an in-memory database.
    pub async fn new() -> Self {
        let db = Database::open_in_memory()
            .await
            .expect("Failed to create test database");

        let app_state = Arc::new(AppState::new(
            db.clone(),
            TEST_SECRET,
            DateTimeFormatter::default(),
        ));
        let router = create_router(app_state, &[]);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, db }
    }

    /// Insert a user and return its ID.
    pub async fn create_user(&self, name: &str) -> i64 {
        UserRepository::new(self.db.pool())
            .create(&NewUser::new(
                name,
                format!("{name}@example.com"),
                "hashed-password",
            ))
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Insert a category and return its ID.
    pub async fn create_category(&self, name: &str) -> i64 {
        CategoryRepository::new(self.db.pool())
            .create(name)
            .await
            .expect("Failed to create test category")
            .id
    }

    /// Insert a posting directly and return its ID.
    pub async fn create_posting(&self, user_id: i64, category_id: i64, title: &str) -> i64 {
        PostingRepository::new(self.db.pool())
            .create(&NewPosting::new(category_id, user_id, title, "content"))
            .await
            .expect("Failed to create test posting")
            .id
    }
}

/// Mint a valid token for `user_id`.
pub fn token_for(user_id: i64) -> String {
    mint_token(user_id, TEST_SECRET, 3600)
}

/// Mint a token with an explicit secret and lifetime (negative = expired).
pub fn mint_token(user_id: i64, secret: &str, lifetime_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = JwtClaims {
        sub: user_id,
        iat: now as u64,
        exp: (now + lifetime_secs) as u64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode JWT")
}

/// `Authorization` header value for `user_id`.
pub fn bearer(user_id: i64) -> String {
    format!("Bearer {}", token_for(user_id))
}
