//! Neighbour navigation engine.
//!
//! [`resolve_neighbour`] is a pure function over a folder listing: filter by
//! file type policy, stable sort, find the current file by name, step one
//! position forward or backward. [`Navigator`] wraps it with the user's
//! settings and a host [`Workspace`].

use crate::commands::NavigationCommand;
use crate::config::MARKDOWN_EXTENSION;
use crate::gesture::SwipeDirection;
use crate::host::Workspace;
use crate::models::{FileRecord, FolderEntry, IncludedFileTypes, NavigationSettings, SortOrder};
use crate::sort::Sorter;

// =============================================================================
// Direction
// =============================================================================

/// Step direction within the sorted listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Whether `file` passes the configured file type policy.
pub fn is_included(file: &FileRecord, settings: &NavigationSettings) -> bool {
    match settings.included_file_types {
        IncludedFileTypes::AllFiles => true,
        IncludedFileTypes::MarkdownOnly => file.extension == MARKDOWN_EXTENSION,
        IncludedFileTypes::AdditionalExtensions => {
            file.extension == MARKDOWN_EXTENSION
                || settings
                    .additional_extensions
                    .iter()
                    .any(|ext| *ext == file.extension)
        }
    }
}

/// Files of a listing that take part in navigation, in `sorter` order.
///
/// Folders are always skipped.
pub fn neighbouring_files<'a>(
    siblings: &'a [FolderEntry],
    sorter: Sorter,
    settings: &NavigationSettings,
) -> Vec<&'a FileRecord> {
    let mut files: Vec<&FileRecord> = siblings
        .iter()
        .filter_map(FolderEntry::as_file)
        .filter(|file| is_included(file, settings))
        .collect();
    sorter.sort(&mut files);
    files
}

/// Index one step from `index` in a list of `len` items.
///
/// Wraps when `looping`, otherwise clamps to the ends.
fn step_index(index: usize, len: usize, direction: Direction, looping: bool) -> usize {
    let target = index as isize + direction.delta();
    if looping {
        target.rem_euclid(len as isize) as usize
    } else {
        target.clamp(0, len as isize - 1) as usize
    }
}

/// The file next to `current` in `siblings`.
///
/// Returns `None` when no file qualifies or when `current` itself is not
/// part of the filtered listing (e.g., a PDF under the markdown-only
/// policy). `current` is matched by name on every call.
pub fn resolve_neighbour<'a>(
    current: &FileRecord,
    siblings: &'a [FolderEntry],
    sorter: Sorter,
    direction: Direction,
    settings: &NavigationSettings,
) -> Option<&'a FileRecord> {
    let files = neighbouring_files(siblings, sorter, settings);
    let index = files.iter().position(|file| file.name == current.name)?;
    let next = step_index(index, files.len(), direction, settings.enable_folder_loop);
    files.get(next).copied()
}

// =============================================================================
// Navigator
// =============================================================================

/// Owns the navigation settings and drives a host workspace.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    settings: NavigationSettings,
}

impl Navigator {
    pub fn new(settings: NavigationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    pub fn replace_settings(&mut self, settings: NavigationSettings) {
        self.settings = settings;
    }

    pub fn set_default_sort_order(&mut self, order: SortOrder) {
        self.settings.default_sort_order = order;
    }

    pub fn set_folder_loop(&mut self, enabled: bool) {
        self.settings.enable_folder_loop = enabled;
    }

    pub fn set_included_file_types(&mut self, policy: IncludedFileTypes) {
        self.settings.included_file_types = policy;
    }

    pub fn set_additional_extensions(&mut self, extensions: Vec<String>) {
        self.settings.additional_extensions = extensions;
    }

    /// Order used by the plain next/previous commands.
    ///
    /// The explorer's current order wins over the configured default.
    pub fn effective_sort_order<W: Workspace + ?Sized>(&self, workspace: &W) -> SortOrder {
        workspace
            .explorer_sort_order()
            .unwrap_or(self.settings.default_sort_order)
    }

    /// Run a navigation command against the workspace.
    ///
    /// Returns the file that was opened, if any.
    pub fn run_command<W: Workspace + ?Sized>(
        &self,
        workspace: &W,
        command: NavigationCommand,
    ) -> Option<FileRecord> {
        let order = command
            .sort_order()
            .unwrap_or_else(|| self.effective_sort_order(workspace));
        let direction = command.direction();
        log::debug!(
            "{} with sort order {} ({:?})",
            command.id(),
            order,
            direction
        );
        self.navigate(workspace, order.into(), direction)
    }

    /// Navigate in response to a recognized swipe.
    ///
    /// A right swipe goes back, a left swipe goes forward.
    pub fn handle_swipe<W: Workspace + ?Sized>(
        &self,
        workspace: &W,
        swipe: SwipeDirection,
    ) -> Option<FileRecord> {
        let command = match swipe.direction() {
            Direction::Forward => NavigationCommand::Next,
            Direction::Backward => NavigationCommand::Prev,
        };
        self.run_command(workspace, command)
    }

    /// Open the neighbour of the active file.
    ///
    /// Nothing is opened when there is no neighbour or when the neighbour is
    /// the active file itself (clamped at an end of the folder).
    pub fn navigate<W: Workspace + ?Sized>(
        &self,
        workspace: &W,
        sorter: Sorter,
        direction: Direction,
    ) -> Option<FileRecord> {
        let active = workspace.active_file()?;
        let siblings = workspace.siblings(&active);
        let target = resolve_neighbour(&active, &siblings, sorter, direction, &self.settings)?;

        if target.name == active.name {
            log::trace!("already at the end of the folder: {}", active.path);
            return None;
        }

        workspace.open_file(target);
        Some(target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortStrategy;

    fn note(name: &str) -> FileRecord {
        FileRecord::from_path(&format!("notes/{}.md", name))
    }

    fn file(name: &str, extension: &str) -> FileRecord {
        FileRecord::from_path(&format!("notes/{}.{}", name, extension))
    }

    fn listing(files: Vec<FileRecord>) -> Vec<FolderEntry> {
        files.into_iter().map(FolderEntry::from).collect()
    }

    fn notes(names: &[&str]) -> Vec<FolderEntry> {
        listing(names.iter().map(|n| note(n)).collect())
    }

    fn names(files: &[&FileRecord]) -> Vec<String> {
        files.iter().map(|f| f.basename.clone()).collect()
    }

    fn alphabetical() -> Sorter {
        Sorter::new(SortStrategy::Alphabetical)
    }

    fn looping() -> NavigationSettings {
        NavigationSettings {
            enable_folder_loop: true,
            ..Default::default()
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn test_contains_all_files() {
        let siblings = notes(&["1", "2", "3"]);
        let files = neighbouring_files(&siblings, alphabetical(), &NavigationSettings::default());
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_markdown_only() {
        let siblings = listing(vec![note("1"), note("2"), file("3", "pdf")]);
        let files = neighbouring_files(&siblings, alphabetical(), &NavigationSettings::default());
        assert_eq!(names(&files), vec!["1", "2"]);
    }

    #[test]
    fn test_additional_extensions() {
        let siblings = listing(vec![note("1"), note("2"), file("3", "pdf"), file("4", "png")]);
        let settings = NavigationSettings {
            included_file_types: IncludedFileTypes::AdditionalExtensions,
            additional_extensions: vec!["pdf".to_string()],
            ..Default::default()
        };
        let files = neighbouring_files(&siblings, alphabetical(), &settings);
        assert_eq!(names(&files), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_all_files_skips_directories() {
        let mut siblings = listing(vec![note("1"), file("2", "pdf"), file("3", "png")]);
        siblings.push(FolderEntry::folder("notes/somedir"));
        let settings = NavigationSettings {
            included_file_types: IncludedFileTypes::AllFiles,
            ..Default::default()
        };
        let files = neighbouring_files(&siblings, alphabetical(), &settings);
        assert_eq!(names(&files), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_directories_excluded_under_every_policy() {
        let mut siblings = notes(&["1"]);
        siblings.push(FolderEntry::folder("notes/somedir.md"));
        for policy in [
            IncludedFileTypes::MarkdownOnly,
            IncludedFileTypes::AllFiles,
            IncludedFileTypes::AdditionalExtensions,
        ] {
            let settings = NavigationSettings {
                included_file_types: policy,
                ..Default::default()
            };
            assert_eq!(neighbouring_files(&siblings, alphabetical(), &settings).len(), 1);
        }
    }

    #[test]
    fn test_sorts_files() {
        let siblings = notes(&["2", "1", "3"]);
        let files = neighbouring_files(&siblings, alphabetical(), &NavigationSettings::default());
        assert_eq!(names(&files), vec!["1", "2", "3"]);
    }

    // =========================================================================
    // Index Stepping
    // =========================================================================

    #[test]
    fn test_step_index() {
        assert_eq!(step_index(2, 3, Direction::Forward, true), 0);
        assert_eq!(step_index(0, 3, Direction::Backward, true), 2);
        assert_eq!(step_index(2, 3, Direction::Forward, false), 2);
        assert_eq!(step_index(0, 3, Direction::Backward, false), 0);
        assert_eq!(step_index(0, 1, Direction::Forward, true), 0);
    }

    #[test]
    fn test_forward_and_backward() {
        let siblings = notes(&["3", "1", "2"]);
        let settings = NavigationSettings::default();
        let current = note("2");

        let next = resolve_neighbour(&current, &siblings, alphabetical(), Direction::Forward, &settings);
        assert_eq!(next.map(|f| f.basename.as_str()), Some("3"));

        let prev = resolve_neighbour(&current, &siblings, alphabetical(), Direction::Backward, &settings);
        assert_eq!(prev.map(|f| f.basename.as_str()), Some("1"));
    }

    #[test]
    fn test_loop_returns_to_start() {
        let siblings = notes(&["c", "a", "d", "b"]);
        let settings = looping();
        let start = note("c");

        for direction in [Direction::Forward, Direction::Backward] {
            let mut current = start.clone();
            for _ in 0..siblings.len() {
                current = resolve_neighbour(&current, &siblings, alphabetical(), direction, &settings)
                    .cloned()
                    .unwrap();
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn test_clamp_at_last_is_idempotent() {
        let siblings = notes(&["1", "2", "3"]);
        let settings = NavigationSettings::default();
        let last = note("3");

        let next = resolve_neighbour(&last, &siblings, alphabetical(), Direction::Forward, &settings);
        assert_eq!(next, Some(&last));

        let first = note("1");
        let prev = resolve_neighbour(&first, &siblings, alphabetical(), Direction::Backward, &settings);
        assert_eq!(prev, Some(&first));
    }

    #[test]
    fn test_current_excluded_yields_none() {
        let siblings = listing(vec![note("1"), note("2"), file("3", "pdf")]);
        let current = file("3", "pdf");
        let next = resolve_neighbour(
            &current,
            &siblings,
            alphabetical(),
            Direction::Forward,
            &NavigationSettings::default(),
        );
        assert_eq!(next, None);
    }

    #[test]
    fn test_empty_listing_yields_none() {
        let next = resolve_neighbour(
            &note("1"),
            &[],
            alphabetical(),
            Direction::Forward,
            &looping(),
        );
        assert_eq!(next, None);
    }

    #[test]
    fn test_lookup_by_name_not_path() {
        // A snapshot taken before a rename of the parent still resolves
        let siblings = notes(&["1", "2"]);
        let current = FileRecord::from_path("old-folder/1.md");
        let next = resolve_neighbour(
            &current,
            &siblings,
            alphabetical(),
            Direction::Forward,
            &NavigationSettings::default(),
        );
        assert_eq!(next.map(|f| f.path.as_str()), Some("notes/2.md"));
    }
}
