//! Bookmark store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the bookmark store
#[derive(Debug, Error)]
pub enum BookmarksError {
    /// No bookmark store could be located
    #[error("No bookmark store found; pass --bookmarks or set bookmarks_file in the config")]
    StoreNotFound,

    /// The store file exists but could not be read
    #[error("Failed to read bookmark store {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not valid bookmark JSON
    #[error("Failed to parse bookmark store {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
