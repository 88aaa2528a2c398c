//! Authorization checks for authenticated users.

mod permission;

pub use permission::{require_owner, PermissionError};
