//! Markq - a fuzzy launcher for browser bookmarks
//!
//! This library reads the browser's bookmark forest, flattens it to the
//! addressable entries, and drives an interactive fuzzy picker that opens
//! the confirmed entry in the default browser. Privileged internal
//! addresses (chrome://, about:, ...) cannot be opened from outside the
//! browser, so confirming one copies it to the clipboard and requests a
//! blank tab to paste into.

use thiserror::Error;

pub mod bookmarks;
pub mod cli;
pub mod config;
pub mod picker;
pub mod search;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarkqError {
    /// Bookmark store error
    #[error("Bookmark store error: {0}")]
    BookmarksError(#[from] bookmarks::BookmarksError),
    /// Picker error
    #[error("Picker error: {0}")]
    PickerError(#[from] picker::PickerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
