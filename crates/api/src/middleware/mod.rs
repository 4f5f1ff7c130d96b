//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.
//!
//! Role checks are not done here: the workflow service consults the
//! authorization policy itself, so every route only needs a caller.

pub mod auth;
