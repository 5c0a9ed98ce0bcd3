//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - window, storage and document accessors
//! - [`logger`] - a `log` backend writing to the browser console

pub mod dom;
pub mod logger;
