//! localStorage-backed settings persistence.
//!
//! Settings are stored as one JSON document under a fixed key. A missing
//! key means nothing was saved yet; the navigator then starts from the
//! defaults.

use neighbour_nav_core::config::SETTINGS_STORAGE_KEY;
use neighbour_nav_core::{NavigationSettings, SettingsError, SettingsStore};

use crate::utils::dom;

/// [`SettingsStore`] writing to `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageSettings {
    key: String,
}

impl Default for LocalStorageSettings {
    fn default() -> Self {
        Self::with_key(SETTINGS_STORAGE_KEY)
    }
}

impl LocalStorageSettings {
    /// Store under a custom key (e.g., one per vault).
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SettingsStore for LocalStorageSettings {
    fn load(&self) -> Result<Option<NavigationSettings>, SettingsError> {
        let storage = dom::local_storage().ok_or(SettingsError::StorageUnavailable)?;
        let json = storage
            .get_item(&self.key)
            .map_err(|_| SettingsError::StorageUnavailable)?;
        json.as_deref().map(NavigationSettings::from_json).transpose()
    }

    fn save(&self, settings: &NavigationSettings) -> Result<(), SettingsError> {
        let storage = dom::local_storage().ok_or(SettingsError::StorageUnavailable)?;
        let json = settings.to_json()?;
        storage
            .set_item(&self.key, &json)
            .map_err(|_| SettingsError::SaveFailed)
    }
}
