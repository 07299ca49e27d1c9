//! Request extractors whose rejections use the JSON error envelope.
//!
//! axum's own `Json` and `Path` reject with a plain-text body. These wrappers
//! delegate to them and convert the rejection into an [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use spycat_core::error::CoreError;

use crate::error::AppError;

/// JSON request body. A body that parses but does not match the target type
/// is a 422 validation error; anything else is a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. An unparsable segment is a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            }
            _ => AppError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
