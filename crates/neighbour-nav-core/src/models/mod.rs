//! Data models shared by the navigation engine and the gesture recognizer.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`FolderEntry`] - snapshots of the host's folder listing
//! - [`NavigationSettings`], [`SortOrder`], [`IncludedFileTypes`] - user configuration
//! - [`TouchPoint`] - raw touch coordinates

mod file;
mod settings;
mod touch;

pub use file::{FileRecord, FolderEntry};
pub use settings::{IncludedFileTypes, NavigationSettings, SortOrder, parse_extension_list};
pub use touch::TouchPoint;
