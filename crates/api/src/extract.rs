//! Extractors whose rejections render through [`AppError`].
//!
//! axum's stock `Json`, `Query` and `Path` reply with plain-text bodies on
//! failure. These wrappers keep the same parsing but turn rejections into the
//! JSON error envelope used everywhere else.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Deserialized query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Deserialized path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
