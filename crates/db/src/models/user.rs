//! Row model for the `users` table.

use pvz_core::error::StoreError;
use pvz_core::roles::Role;
use pvz_core::types::{EntityId, Timestamp};
use pvz_core::user::User;
use sqlx::FromRow;

use crate::error::corrupt_row;

/// Full row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: EntityId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|e| corrupt_row("users", e))?;
        Ok(User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            role,
        })
    }
}
