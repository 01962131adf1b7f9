//! Chromium-format bookmark store reader
//!
//! Chromium-family browsers (Chrome, Brave, Edge, Vivaldi) keep bookmarks
//! in a single JSON file named `Bookmarks` under the profile directory.
//! Reading it is the terminal counterpart of the browser's one-shot
//! bookmarks API: one load returns the full forest.

use super::error::BookmarksError;
use super::model::BookmarkNode;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A one-shot provider of the full bookmark forest
pub trait BookmarkSource: Send + 'static {
    /// Load the complete forest. Called once per picker session.
    ///
    /// # Errors
    ///
    /// Returns `BookmarksError` if the store is missing or unreadable.
    /// Callers treat any failure as "no data", not as a fatal error.
    fn load(&self) -> Result<Vec<BookmarkNode>, BookmarksError>;
}

/// Profile locations probed when no explicit path is configured,
/// relative to the user config directory
const PROFILE_CANDIDATES: &[&str] = &[
    "google-chrome/Default/Bookmarks",
    "chromium/Default/Bookmarks",
    "BraveSoftware/Brave-Browser/Default/Bookmarks",
    "microsoft-edge/Default/Bookmarks",
    "vivaldi/Default/Bookmarks",
];

/// Reads a Chromium-format `Bookmarks` JSON file
#[derive(Debug, Clone)]
pub struct ChromiumSource {
    path: Option<PathBuf>,
}

impl ChromiumSource {
    /// Create a source, optionally pinned to an explicit store path
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Resolve the store path: explicit path first, then the standard
    /// profile locations in order.
    fn resolve_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }

        let config_dir = dirs::config_dir()?;
        PROFILE_CANDIDATES
            .iter()
            .map(|candidate| config_dir.join(candidate))
            .find(|path| path.exists())
    }
}

impl BookmarkSource for ChromiumSource {
    fn load(&self) -> Result<Vec<BookmarkNode>, BookmarksError> {
        let path = self.resolve_path().ok_or(BookmarksError::StoreNotFound)?;

        let raw = fs::read_to_string(&path).map_err(|source| BookmarksError::ReadError {
            path: path.clone(),
            source,
        })?;

        let file: BookmarksFile =
            serde_json::from_str(&raw).map_err(|source| BookmarksError::ParseError {
                path: path.clone(),
                source,
            })?;

        // Root folders in Chromium's own order: toolbar, other, synced.
        let forest = [file.roots.bookmark_bar, file.roots.other, file.roots.synced]
            .into_iter()
            .flatten()
            .map(RawNode::into_node)
            .collect();

        Ok(forest)
    }
}

/// Top-level shape of the `Bookmarks` file
#[derive(Debug, Deserialize)]
struct BookmarksFile {
    roots: Roots,
}

#[derive(Debug, Deserialize)]
struct Roots {
    bookmark_bar: Option<RawNode>,
    other: Option<RawNode>,
    synced: Option<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
    url: Option<String>,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl RawNode {
    fn into_node(self) -> BookmarkNode {
        let address = if self.kind == "url" { self.url } else { None };
        BookmarkNode {
            id: self.id,
            title: self.name,
            address,
            children: self.children.into_iter().map(Self::into_node).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "version": 1,
        "roots": {
            "bookmark_bar": {
                "id": "1", "name": "Bookmarks bar", "type": "folder",
                "children": [
                    {"id": "5", "name": "Rust", "type": "url", "url": "https://www.rust-lang.org/"},
                    {"id": "6", "name": "Dev", "type": "folder", "children": [
                        {"id": "7", "name": "docs.rs", "type": "url", "url": "https://docs.rs/"}
                    ]}
                ]
            },
            "other": {
                "id": "2", "name": "Other bookmarks", "type": "folder",
                "children": [
                    {"id": "8", "name": "Flags", "type": "url", "url": "chrome://flags/"}
                ]
            }
        }
    }"#;

    fn write_store(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_chromium_store() {
        let store = write_store(SAMPLE);
        let source = ChromiumSource::new(Some(store.path().to_path_buf()));

        let forest = source.load().unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].title, "Bookmarks bar");
        assert!(forest[0].address.is_none());
        assert_eq!(forest[0].children[0].address.as_deref(), Some("https://www.rust-lang.org/"));
        assert_eq!(forest[1].children[0].address.as_deref(), Some("chrome://flags/"));
    }

    #[test]
    fn test_load_missing_store() {
        let source = ChromiumSource::new(Some(PathBuf::from("/nonexistent/Bookmarks")));
        assert!(matches!(source.load(), Err(BookmarksError::ReadError { .. })));
    }

    #[test]
    fn test_load_malformed_store() {
        let store = write_store("not json at all");
        let source = ChromiumSource::new(Some(store.path().to_path_buf()));
        assert!(matches!(source.load(), Err(BookmarksError::ParseError { .. })));
    }
}
