//! Host-independent core for neighbouring file navigation.
//!
//! This crate provides:
//! - [`Sorter`] and [`SortOrder`] - the sort strategy catalogue
//! - [`resolve_neighbour`] - the neighbour navigation engine
//! - [`SwipeRecognizer`] - the two-finger swipe state machine
//! - [`NavigationCommand`] - the enumerable command surface
//! - [`Navigator`] - settings owner that drives a host [`Workspace`]
//!
//! Everything here is synchronous and single-threaded. Host integration
//! (touch listeners, file opening, persistence) happens through the traits
//! in [`host`].

pub mod collate;
pub mod commands;
pub mod config;
pub mod error;
pub mod gesture;
pub mod host;
pub mod models;
pub mod navigator;
pub mod sort;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use commands::NavigationCommand;
pub use error::{CommandError, SettingsError};
pub use gesture::{GestureConfig, GestureState, Propagation, SwipeDirection, SwipeRecognizer};
pub use host::{SettingsStore, Workspace};
pub use models::{
    FileRecord, FolderEntry, IncludedFileTypes, NavigationSettings, SortOrder, TouchPoint,
};
pub use navigator::{Direction, Navigator, neighbouring_files, resolve_neighbour};
pub use sort::{SortStrategy, Sorter};
