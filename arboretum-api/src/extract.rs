/// Request extractors
///
/// [`AppJson`] wraps `axum::Json` so malformed bodies and wrong field types
/// produce an [`ApiError`] (400) instead of axum's plain-text 422.

use crate::error::{ApiError, ApiResult};
use axum::extract::FromRequest;

/// JSON body extractor with [`ApiError`] rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Unwraps a field that request validation has already marked as required
///
/// Returns a validation error instead of panicking if the field is absent.
pub fn required<T>(field: Option<T>, name: &str) -> ApiResult<T> {
    field.ok_or_else(|| ApiError::missing_field(name))
}
