//! Error types for the browser adapter.
//!
//! - [`HostError`] - calls into the JS workspace object
//!
//! Settings and command errors come from the core crate.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors talking to the JS host workspace.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// Host object does not provide the method
    #[error("host is missing method '{0}'")]
    MissingMethod(&'static str),
    /// Host method threw
    #[error("host call '{method}' failed: {message}")]
    CallFailed {
        method: &'static str,
        message: String,
    },
    /// Host returned a value of the wrong shape
    #[error("invalid value from '{method}': {message}")]
    InvalidValue {
        method: &'static str,
        message: String,
    },
}

/// Best-effort message for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}

/// Convert an error into a JS exception value.
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from(js_sys::Error::new(&err.to_string()))
}
