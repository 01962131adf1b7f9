//! Bookmark tree loading and flattening
//!
//! The browser stores bookmarks as a forest of folders and leaves. This
//! module reads that forest from disk, flattens it to the addressable
//! leaves in document order, and classifies each entry as a normal web
//! address or a privileged internal one.

mod chromium;
mod error;
mod flatten;
mod model;

pub use chromium::{BookmarkSource, ChromiumSource};
pub use error::BookmarksError;
pub use flatten::flatten;
pub use model::{BookmarkEntry, BookmarkNode, EntryKind, classify};
