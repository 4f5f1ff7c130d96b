//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's stock `Json`, `Query`, and `Path` reject with plain-text bodies and
//! a mix of 400/415/422 statuses. These wrappers route every rejection into
//! `AppError::BadRequest`, so malformed input always yields the standard
//! `{"error", "code"}` 400 body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
