//! Registered users. Only the authentication flow reads these; the
//! workflow sees nothing but the caller's [`Role`].

use crate::roles::Role;
use crate::types::{new_id, EntityId};

/// A registered account.
///
/// Holds the password hash, so it is never serialized to responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: new_id(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}
