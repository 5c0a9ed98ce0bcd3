//! Configuration constants.
//!
//! Centralizes the gesture thresholds and persistence defaults used
//! throughout the crate.

// =============================================================================
// Gesture Thresholds (CSS pixels)
// =============================================================================

/// Horizontal travel after which a two-finger contact starts tracking.
pub const MIN_X_THRESHOLD: f64 = 20.0;

/// Vertical travel of either finger that rejects the gesture.
pub const MAX_Y_THRESHOLD: f64 = 50.0;

/// Horizontal travel at lift-off required to emit a swipe.
pub const TWO_FINGER_SWIPE_THRESHOLD: f64 = 120.0;

// =============================================================================
// File Types
// =============================================================================

/// Extension of the notes that are always navigable.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extra extensions offered by default for the `additionalExtensions` policy.
pub const DEFAULT_ADDITIONAL_EXTENSIONS: &[&str] = &["canvas", "pdf"];

// =============================================================================
// Persistence
// =============================================================================

/// Storage key for the serialized navigation settings.
pub const SETTINGS_STORAGE_KEY: &str = "neighbouring-file-navigator.settings";
