//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{EventTarget, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get `document.body` as an event target.
///
/// Touch listeners are registered here so they see every touch on the page.
pub fn body_target() -> Option<EventTarget> {
    let body = window()?.document()?.body()?;
    Some(body.unchecked_into::<EventTarget>())
}
