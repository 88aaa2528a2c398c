//! Ownership checks for mutating operations.
//!
//! Every update or delete of a posting or comment goes through
//! [`require_owner`] before touching the database.

use thiserror::Error;

use crate::db::User;
use crate::PostingsError;

/// Permission-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// The acting user is not the author of the record.
    #[error("user {actor_id} is not the author (author is {owner_id})")]
    NotOwner { actor_id: i64, owner_id: i64 },
}

impl From<PermissionError> for PostingsError {
    fn from(err: PermissionError) -> Self {
        PostingsError::Permission(err.to_string())
    }
}

/// Check that `actor` authored the record owned by `owner_id`.
///
/// # Examples
///
/// ```
/// use postings::auth::{require_owner, PermissionError};
/// use postings::db::User;
///
/// let user = User {
///     id: 1,
///     name: "kylee".into(),
///     email: "kylee@example.com".into(),
///     password: String::new(),
///     created_at: String::new(),
/// };
/// assert!(require_owner(&user, 1).is_ok());
/// assert_eq!(
///     require_owner(&user, 2),
///     Err(PermissionError::NotOwner { actor_id: 1, owner_id: 2 })
/// );
/// ```
pub fn require_owner(actor: &User, owner_id: i64) -> Result<(), PermissionError> {
    if actor.id == owner_id {
        Ok(())
    } else {
        Err(PermissionError::NotOwner {
            actor_id: actor.id,
            owner_id,
        })
    }
}
