//! Browser adapter for neighbouring file navigation.
//!
//! Exposes [`NavigatorPlugin`] to JavaScript. The plugin owns a core
//! [`Navigator`](neighbour_nav_core::Navigator), persists its settings in
//! localStorage and feeds `document.body` touch events into a
//! [`SwipeRecognizer`](neighbour_nav_core::SwipeRecognizer).

pub mod error;
pub mod host;
pub mod plugin;
pub mod storage;
pub mod touch;
pub mod utils;

pub use plugin::NavigatorPlugin;
