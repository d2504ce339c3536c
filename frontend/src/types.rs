//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Error Types** - DOM and storage failures

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these are fatal: the page logs them and keeps running.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// A DOM API call failed or an element was missing.
    #[error("DOM error: {0}")]
    Dom(String),
    /// localStorage was unavailable or refused the operation.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn dom(err: JsValue) -> Self {
        AppError::Dom(describe_js(&err))
    }

    pub fn storage(err: JsValue) -> Self {
        AppError::Storage(describe_js(&err))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

/// Readable text for a thrown JS value (`NotAllowedError: ...` style when
/// it is an `Error`).
pub fn describe_js(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => format!("{}: {}", String::from(error.name()), String::from(error.message())),
        None => format!("{:?}", err),
    }
}
