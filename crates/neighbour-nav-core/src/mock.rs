//! In-memory host implementations for tests.
//!
//! Enabled with the `mock` feature (always on for unit tests).

use std::cell::RefCell;

use crate::error::SettingsError;
use crate::host::{SettingsStore, Workspace};
use crate::models::{FileRecord, FolderEntry, NavigationSettings, SortOrder};

/// A single folder with an active file.
///
/// Opening a file makes it the active file, so commands can be chained.
#[derive(Debug, Default)]
pub struct MockWorkspace {
    pub listing: RefCell<Vec<FolderEntry>>,
    pub active: RefCell<Option<FileRecord>>,
    pub explorer_order: Option<SortOrder>,
    pub opened: RefCell<Vec<FileRecord>>,
}

impl MockWorkspace {
    pub fn new(listing: Vec<FolderEntry>) -> Self {
        Self {
            listing: RefCell::new(listing),
            ..Default::default()
        }
    }

    /// Make the listed file with this name active.
    pub fn activate(&self, name: &str) {
        let file = self
            .listing
            .borrow()
            .iter()
            .filter_map(FolderEntry::as_file)
            .find(|file| file.name == name)
            .cloned();
        *self.active.borrow_mut() = file;
    }

    pub fn active_name(&self) -> Option<String> {
        self.active.borrow().as_ref().map(|file| file.name.clone())
    }
}

impl Workspace for MockWorkspace {
    fn active_file(&self) -> Option<FileRecord> {
        self.active.borrow().clone()
    }

    fn siblings(&self, _file: &FileRecord) -> Vec<FolderEntry> {
        self.listing.borrow().clone()
    }

    fn open_file(&self, file: &FileRecord) {
        self.opened.borrow_mut().push(file.clone());
        *self.active.borrow_mut() = Some(file.clone());
    }

    fn explorer_sort_order(&self) -> Option<SortOrder> {
        self.explorer_order
    }
}

/// Settings kept as a JSON string, like a browser storage slot.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    pub slot: RefCell<Option<String>>,
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<NavigationSettings>, SettingsError> {
        self.slot
            .borrow()
            .as_deref()
            .map(NavigationSettings::from_json)
            .transpose()
    }

    fn save(&self, settings: &NavigationSettings) -> Result<(), SettingsError> {
        *self.slot.borrow_mut() = Some(settings.to_json()?);
        Ok(())
    }
}
