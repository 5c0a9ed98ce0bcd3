use serde::{Deserialize, Serialize};

// =============================================================================
// File Record
// =============================================================================

/// Snapshot of a file taken when a navigation request is made.
///
/// Records are never mutated by the core. The host supplies them fresh on
/// every call because the folder may have changed in between.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Opaque identifier (vault-relative path)
    pub path: String,
    /// File name including extension (e.g., "2.10.md")
    pub name: String,
    /// File name without extension (e.g., "2.10")
    pub basename: String,
    /// Extension without the leading dot (e.g., "md")
    pub extension: String,
    /// Path of the containing folder (empty string for the root)
    #[serde(default)]
    pub parent: String,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub ctime: i64,
    /// Last modification time in epoch milliseconds
    #[serde(default)]
    pub mtime: i64,
}

impl FileRecord {
    /// Build a record from a path, deriving name, basename, extension and parent.
    ///
    /// Timestamps start at zero; see [`FileRecord::with_times`].
    pub fn from_path(path: &str) -> Self {
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (parent, name),
            None => ("", path),
        };
        let (basename, extension) = match name.rfind('.') {
            // A leading dot marks a hidden file, not an extension
            Some(i) if i > 0 => (&name[..i], &name[i + 1..]),
            _ => (name, ""),
        };

        Self {
            path: path.to_string(),
            name: name.to_string(),
            basename: basename.to_string(),
            extension: extension.to_string(),
            parent: parent.to_string(),
            ctime: 0,
            mtime: 0,
        }
    }

    /// Set creation and modification timestamps.
    pub fn with_times(mut self, ctime: i64, mtime: i64) -> Self {
        self.ctime = ctime;
        self.mtime = mtime;
        self
    }
}

// =============================================================================
// Folder Entry
// =============================================================================

/// One child of a folder listing.
///
/// Listings mix files and subfolders; subfolders are never navigation
/// targets.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FolderEntry {
    File(FileRecord),
    Folder { path: String, name: String },
}

impl FolderEntry {
    /// Create a folder entry from its path.
    pub fn folder(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        FolderEntry::Folder {
            path: path.to_string(),
            name: name.to_string(),
        }
    }

    /// Get the file record (files only).
    pub fn as_file(&self) -> Option<&FileRecord> {
        match self {
            FolderEntry::File(file) => Some(file),
            FolderEntry::Folder { .. } => None,
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, FolderEntry::Folder { .. })
    }
}

impl From<FileRecord> for FolderEntry {
    fn from(file: FileRecord) -> Self {
        FolderEntry::File(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_nested() {
        let file = FileRecord::from_path("notes/jd/2.10.md");
        assert_eq!(file.name, "2.10.md");
        assert_eq!(file.basename, "2.10");
        assert_eq!(file.extension, "md");
        assert_eq!(file.parent, "notes/jd");
    }

    #[test]
    fn test_from_path_root_and_hidden() {
        let file = FileRecord::from_path("readme.md");
        assert_eq!(file.parent, "");
        assert_eq!(file.basename, "readme");

        let hidden = FileRecord::from_path("notes/.obsidian");
        assert_eq!(hidden.basename, ".obsidian");
        assert_eq!(hidden.extension, "");

        let bare = FileRecord::from_path("Makefile");
        assert_eq!(bare.extension, "");
    }

    #[test]
    fn test_deserialize_listing() {
        let json = r#"[
            {"kind": "file", "path": "a/1.md", "name": "1.md", "basename": "1",
             "extension": "md", "parent": "a", "ctime": 10, "mtime": 20},
            {"kind": "folder", "path": "a/sub", "name": "sub"}
        ]"#;
        let entries: Vec<FolderEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 2);
        let file = entries[0].as_file().unwrap();
        assert_eq!(file.mtime, 20);
        assert!(entries[1].is_folder());
    }

    #[test]
    fn test_deserialize_defaults_timestamps() {
        let json = r#"{"kind": "file", "path": "1.md", "name": "1.md",
                       "basename": "1", "extension": "md"}"#;
        let entry: FolderEntry = serde_json::from_str(json).unwrap();
        let file = entry.as_file().unwrap();
        assert_eq!(file.ctime, 0);
        assert_eq!(file.parent, "");
    }
}
