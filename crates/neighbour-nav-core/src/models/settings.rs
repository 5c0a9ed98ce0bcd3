use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ADDITIONAL_EXTENSIONS;
use crate::error::SettingsError;

// =============================================================================
// Sort Order
// =============================================================================

/// The six user-selectable orderings.
///
/// Serialized names match the host file explorer's sort order values, so a
/// value read from the explorer can be used directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    AlphabeticalReverse,
    ByCreatedTime,
    ByCreatedTimeReverse,
    ByModifiedTime,
    ByModifiedTimeReverse,
}

impl SortOrder {
    /// All sort orders in display order.
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Alphabetical,
        SortOrder::AlphabeticalReverse,
        SortOrder::ByCreatedTime,
        SortOrder::ByCreatedTimeReverse,
        SortOrder::ByModifiedTime,
        SortOrder::ByModifiedTimeReverse,
    ];

    /// Serialized identifier (e.g., "byCreatedTimeReverse").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::AlphabeticalReverse => "alphabeticalReverse",
            Self::ByCreatedTime => "byCreatedTime",
            Self::ByCreatedTimeReverse => "byCreatedTimeReverse",
            Self::ByModifiedTime => "byModifiedTime",
            Self::ByModifiedTimeReverse => "byModifiedTimeReverse",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownSortOrder(s.to_string()))
    }
}

// =============================================================================
// File Type Policy
// =============================================================================

/// Which files take part in navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IncludedFileTypes {
    /// Only `.md` notes
    #[default]
    MarkdownOnly,
    /// Every file (folders are still skipped)
    AllFiles,
    /// `.md` plus [`NavigationSettings::additional_extensions`]
    AdditionalExtensions,
}

// =============================================================================
// Navigation Settings
// =============================================================================

/// User configuration read by the navigator on every request.
///
/// Missing keys in a persisted document fall back to their defaults one by
/// one, so older saved settings keep loading after new fields are added.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationSettings {
    /// Fallback order for the plain next/previous commands
    pub default_sort_order: SortOrder,
    /// Wrap around at the ends of a folder
    pub enable_folder_loop: bool,
    /// File type policy
    pub included_file_types: IncludedFileTypes,
    /// Extra extensions for [`IncludedFileTypes::AdditionalExtensions`]
    pub additional_extensions: Vec<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_sort_order: SortOrder::Alphabetical,
            enable_folder_loop: false,
            included_file_types: IncludedFileTypes::MarkdownOnly,
            additional_extensions: DEFAULT_ADDITIONAL_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl NavigationSettings {
    /// Parse persisted settings, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings for persistence.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(|_| SettingsError::SerializationFailed)
    }
}

/// Normalize a comma-separated extension list from a text field.
///
/// Entries are trimmed and lose a leading '.', empty entries and duplicates
/// are dropped. Order of first appearance is kept.
pub fn parse_extension_list(input: &str) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let ext = raw.trim().trim_start_matches('.').trim();
        if ext.is_empty() || extensions.iter().any(|e| e == ext) {
            continue;
        }
        extensions.push(ext.to_string());
    }
    extensions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = NavigationSettings::default();
        assert_eq!(settings.default_sort_order, SortOrder::Alphabetical);
        assert!(!settings.enable_folder_loop);
        assert_eq!(settings.included_file_types, IncludedFileTypes::MarkdownOnly);
        assert_eq!(settings.additional_extensions, vec!["canvas", "pdf"]);
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let settings = NavigationSettings::from_json(r#"{"enableFolderLoop": true}"#).unwrap();
        assert!(settings.enable_folder_loop);
        assert_eq!(settings.default_sort_order, SortOrder::Alphabetical);
        assert_eq!(settings.additional_extensions, vec!["canvas", "pdf"]);
    }

    #[test]
    fn test_json_uses_camel_case_values() {
        let settings = NavigationSettings {
            default_sort_order: SortOrder::ByModifiedTimeReverse,
            included_file_types: IncludedFileTypes::AdditionalExtensions,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""defaultSortOrder":"byModifiedTimeReverse""#));
        assert!(json.contains(r#""includedFileTypes":"additionalExtensions""#));
        assert_eq!(NavigationSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json() {
        let err = NavigationSettings::from_json(r#"{"defaultSortOrder": "bySize"}"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidJson(_)));
    }

    #[test]
    fn test_sort_order_from_str() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
        assert_eq!(
            "newest".parse::<SortOrder>(),
            Err(SettingsError::UnknownSortOrder("newest".to_string()))
        );
    }

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list(" canvas, .pdf,,png , pdf"),
            vec!["canvas", "pdf", "png"]
        );
        assert!(parse_extension_list("  ").is_empty());
    }
}
