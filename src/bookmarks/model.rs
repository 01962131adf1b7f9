//! Bookmark data model

/// A node in the bookmark forest as supplied by the browser store.
///
/// Folder nodes carry no address and hold their children in original
/// order; only leaf nodes are navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkNode {
    /// Opaque identifier, stable within one load
    pub id: String,
    /// Display label, may be empty
    pub title: String,
    /// Navigable location; `None` for folders
    pub address: Option<String>,
    /// Nested entries (folders only)
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    /// Create a leaf node with an address
    #[must_use]
    pub fn leaf(id: impl Into<String>, title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            address: Some(address.into()),
            children: Vec::new(),
        }
    }

    /// Create a folder node
    #[must_use]
    pub fn folder(
        id: impl Into<String>,
        title: impl Into<String>,
        children: Vec<BookmarkNode>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            address: None,
            children,
        }
    }
}

/// Classification of a flattened entry, computed once per entry.
///
/// Privileged addresses use a reserved scheme the browser refuses to open
/// from outside, so confirming one copies it instead of opening it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Normal address, opened directly in a new tab
    Web,
    /// Internal scheme, copy-to-clipboard then blank tab
    Privileged,
}

/// One navigable item from the flattened forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    pub id: String,
    pub title: String,
    pub address: String,
    pub kind: EntryKind,
}

impl BookmarkEntry {
    /// Label shown in the list; falls back to the address when the
    /// bookmark was saved without a title.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.address
        } else {
            &self.title
        }
    }

    /// Whether confirming this entry copies instead of opening
    #[must_use]
    pub const fn is_privileged(&self) -> bool {
        matches!(self.kind, EntryKind::Privileged)
    }
}

/// Classify an address against the configured internal scheme prefixes
#[must_use]
pub fn classify(address: &str, internal_schemes: &[String]) -> EntryKind {
    if internal_schemes.iter().any(|s| address.starts_with(s.as_str())) {
        EntryKind::Privileged
    } else {
        EntryKind::Web
    }
}
