//! Translation of `sqlx` failures into the store error contract.

use pvz_core::error::StoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error.
///
/// - Unique violations map to [`StoreError::Conflict`] carrying the
///   constraint (or index) name.
/// - Everything else maps to [`StoreError::Backend`].
pub fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::Conflict {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            };
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}

/// A row held a value outside one of the closed enumerations.
pub fn corrupt_row(table: &str, detail: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(format!("corrupt row in {table}: {detail}"))
}
