//! Sort strategy catalogue.
//!
//! A closed set of [`SortStrategy`] comparators plus a reversal flag. The
//! six user-facing [`SortOrder`] values map onto a [`Sorter`] at lookup
//! time, so a strategy and its reverse can never drift apart.

use std::cmp::Ordering;

use crate::collate::natural_cmp;
use crate::models::{FileRecord, SortOrder};

/// Base ordering criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Natural, case-insensitive order of the basename
    Alphabetical,
    /// Creation time, newest first
    CreatedTime,
    /// Modification time, newest first
    ModifiedTime,
}

impl SortStrategy {
    /// Canonical comparison for this strategy.
    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            Self::Alphabetical => natural_cmp(&a.basename, &b.basename),
            Self::CreatedTime => b.ctime.cmp(&a.ctime),
            Self::ModifiedTime => b.mtime.cmp(&a.mtime),
        }
    }
}

/// A strategy with an optional reversal applied on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sorter {
    strategy: SortStrategy,
    reversed: bool,
}

impl Sorter {
    pub const fn new(strategy: SortStrategy) -> Self {
        Self {
            strategy,
            reversed: false,
        }
    }

    /// A sorter producing the inverse order. `self` is left untouched.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self {
            strategy: self.strategy,
            reversed: !self.reversed,
        }
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        let ord = self.strategy.compare(a, b);
        if self.reversed { ord.reverse() } else { ord }
    }

    /// Stable sort in place; ties keep their relative order.
    pub fn sort(&self, files: &mut [&FileRecord]) {
        files.sort_by(|a, b| self.compare(a, b));
    }
}

impl From<SortStrategy> for Sorter {
    fn from(strategy: SortStrategy) -> Self {
        Sorter::new(strategy)
    }
}

impl From<SortOrder> for Sorter {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Alphabetical => Sorter::new(SortStrategy::Alphabetical),
            SortOrder::AlphabeticalReverse => Sorter::new(SortStrategy::Alphabetical).reverse(),
            SortOrder::ByCreatedTime => Sorter::new(SortStrategy::CreatedTime),
            SortOrder::ByCreatedTimeReverse => Sorter::new(SortStrategy::CreatedTime).reverse(),
            SortOrder::ByModifiedTime => Sorter::new(SortStrategy::ModifiedTime),
            SortOrder::ByModifiedTimeReverse => Sorter::new(SortStrategy::ModifiedTime).reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> FileRecord {
        FileRecord::from_path(&format!("{}.md", name))
    }

    fn sorted_names(sorter: Sorter, files: &[FileRecord]) -> Vec<String> {
        let mut refs: Vec<&FileRecord> = files.iter().collect();
        sorter.sort(&mut refs);
        refs.iter().map(|f| f.basename.clone()).collect()
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let files: Vec<_> = ["test - 3", "Test - 2", "test - 1"]
            .into_iter()
            .map(note)
            .collect();
        assert_eq!(
            sorted_names(SortOrder::Alphabetical.into(), &files),
            vec!["test - 1", "Test - 2", "test - 3"]
        );
    }

    #[test]
    fn test_alphabetical_ties_are_stable() {
        let files = vec![
            FileRecord::from_path("b/Same.md"),
            FileRecord::from_path("a/same.md"),
        ];
        let mut refs: Vec<&FileRecord> = files.iter().collect();
        Sorter::new(SortStrategy::Alphabetical).sort(&mut refs);
        assert_eq!(refs[0].path, "b/Same.md");
        assert_eq!(refs[1].path, "a/same.md");
    }

    #[test]
    fn test_time_strategies_are_newest_first() {
        let files = vec![
            note("old").with_times(1, 30),
            note("new").with_times(3, 10),
            note("mid").with_times(2, 20),
        ];
        assert_eq!(
            sorted_names(SortOrder::ByCreatedTime.into(), &files),
            vec!["new", "mid", "old"]
        );
        assert_eq!(
            sorted_names(SortOrder::ByModifiedTime.into(), &files),
            vec!["old", "mid", "new"]
        );
        assert_eq!(
            sorted_names(SortOrder::ByModifiedTimeReverse.into(), &files),
            vec!["new", "mid", "old"]
        );
    }

    #[test]
    fn test_modified_time_sort() {
        let f1 = note("1").with_times(1672502400000, 1675180800000);
        let f2 = note("2").with_times(1689876543210, 1692456789100);
        let f3 = note("3").with_times(1700989701724, 1704025483489);
        let files = vec![f3, f2, f1];

        assert_eq!(
            sorted_names(SortOrder::ByModifiedTimeReverse.into(), &files),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            sorted_names(SortOrder::ByModifiedTime.into(), &files),
            vec!["3", "2", "1"]
        );
    }

    #[test]
    fn test_reverse_inverts_without_mutating() {
        let base = Sorter::new(SortStrategy::Alphabetical);
        let reversed = base.reverse();
        let (a, b) = (note("a"), note("b"));

        assert_eq!(base.compare(&a, &b), Ordering::Less);
        assert_eq!(reversed.compare(&a, &b), Ordering::Greater);
        assert!(!base.is_reversed());
        assert_eq!(reversed.reverse(), base);
    }

    #[test]
    fn test_reverse_orders_map_to_reversed_sorters() {
        for order in SortOrder::ALL {
            let sorter = Sorter::from(order);
            assert_eq!(sorter.is_reversed(), order.as_str().ends_with("Reverse"));
        }
    }
}
