//! User model.
//!
//! Users are owned by the account service; this crate only reads them
//! (and creates them when seeding or testing).

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name shown as the author of postings and comments.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Password hash, never exposed through the API.
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Pre-hashed password.
    pub password: String,
}

impl NewUser {
    /// Create a new user with the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("kylee", "kylee@example.com", "hash");
        assert_eq!(user.name, "kylee");
        assert_eq!(user.email, "kylee@example.com");
        assert_eq!(user.password, "hash");
    }
}
