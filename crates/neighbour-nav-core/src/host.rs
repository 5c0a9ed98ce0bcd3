//! Seams to the host application.
//!
//! The core never touches the file system, the view layer, or persistent
//! storage directly. Hosts implement these traits instead.

use crate::error::SettingsError;
use crate::models::{FileRecord, FolderEntry, NavigationSettings, SortOrder};

/// The host workspace: active file, folder listings and file opening.
pub trait Workspace {
    /// File currently shown in the active view, if any.
    fn active_file(&self) -> Option<FileRecord>;

    /// Children of `file`'s parent folder, listed fresh on every call.
    fn siblings(&self, file: &FileRecord) -> Vec<FolderEntry>;

    /// Focus or load `file` in the active view.
    fn open_file(&self, file: &FileRecord);

    /// Sort order currently selected in the host's file explorer.
    ///
    /// Plain next/previous navigation follows it when present.
    fn explorer_sort_order(&self) -> Option<SortOrder> {
        None
    }
}

/// Load and save [`NavigationSettings`].
///
/// The core decides nothing about when to persist; callers save after a
/// mutation if they want it kept.
pub trait SettingsStore {
    /// Stored settings, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<NavigationSettings>, SettingsError>;

    fn save(&self, settings: &NavigationSettings) -> Result<(), SettingsError>;

    /// Stored settings, falling back to defaults on absence or error.
    fn load_or_default(&self) -> NavigationSettings {
        match self.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => NavigationSettings::default(),
            Err(err) => {
                log::warn!("failed to load settings, using defaults: {}", err);
                NavigationSettings::default()
            }
        }
    }
}
