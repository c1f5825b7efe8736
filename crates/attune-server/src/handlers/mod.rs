//! HTTP request handlers organized by engine component
//!
//! Each submodule contains handlers for a specific API area.

use axum::{extract::rejection::JsonRejection, Json};

use crate::AppError;

pub mod analyze;
pub mod health;
pub mod insights;
pub mod recommendations;

// Re-export all handlers for use in router
pub use analyze::*;
pub use health::*;
pub use insights::*;
pub use recommendations::*;

/// Unwrap a JSON request body, reporting extractor rejections as 400s
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(&rejection.body_text()))
}
