//! Navigation command catalogue.
//!
//! Every direction and sort strategy pair is exposed as a named command so a
//! host can register them one-to-one (hotkeys, command palette).

use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::models::SortOrder;
use crate::navigator::Direction;

/// A named navigation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    /// Next file in the explorer's (or default) order
    Next,
    /// Previous file in the explorer's (or default) order
    Prev,
    NextAlphabetical,
    PrevAlphabetical,
    OlderCreated,
    NewerCreated,
    OlderModified,
    NewerModified,
}

impl NavigationCommand {
    /// All commands in registration order.
    pub const ALL: [NavigationCommand; 8] = [
        NavigationCommand::Next,
        NavigationCommand::Prev,
        NavigationCommand::NextAlphabetical,
        NavigationCommand::PrevAlphabetical,
        NavigationCommand::OlderCreated,
        NavigationCommand::NewerCreated,
        NavigationCommand::OlderModified,
        NavigationCommand::NewerModified,
    ];

    /// Stable command id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::NextAlphabetical => "next-alphabetical",
            Self::PrevAlphabetical => "prev-alphabetical",
            Self::OlderCreated => "older-created",
            Self::NewerCreated => "newer-created",
            Self::OlderModified => "older-modified",
            Self::NewerModified => "newer-modified",
        }
    }

    /// Human-readable name for command palettes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Navigate to next file",
            Self::Prev => "Navigate to previous file",
            Self::NextAlphabetical => "Navigate to next file (alphabetical)",
            Self::PrevAlphabetical => "Navigate to previous file (alphabetical)",
            Self::OlderCreated => "Navigate to older file (creation time)",
            Self::NewerCreated => "Navigate to newer file (creation time)",
            Self::OlderModified => "Navigate to older file (modification time)",
            Self::NewerModified => "Navigate to newer file (modification time)",
        }
    }

    /// Fixed sort order, or `None` to follow the explorer/default order.
    ///
    /// Time orders are newest first, so stepping forward reaches older files.
    pub fn sort_order(&self) -> Option<SortOrder> {
        match self {
            Self::Next | Self::Prev => None,
            Self::NextAlphabetical | Self::PrevAlphabetical => Some(SortOrder::Alphabetical),
            Self::OlderCreated | Self::NewerCreated => Some(SortOrder::ByCreatedTime),
            Self::OlderModified | Self::NewerModified => Some(SortOrder::ByModifiedTime),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::Next | Self::NextAlphabetical | Self::OlderCreated | Self::OlderModified => {
                Direction::Forward
            }
            Self::Prev | Self::PrevAlphabetical | Self::NewerCreated | Self::NewerModified => {
                Direction::Backward
            }
        }
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NavigationCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}
