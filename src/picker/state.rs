//! Picker state
//!
//! Holds all mutable state for one picker session: the loaded entries,
//! the filtered view, the highlight selection, the query line, and the
//! transient UI signals (status messages, copied flash).

use crate::bookmarks::BookmarkEntry;
use std::time::{Duration, Instant};

/// Lifecycle of a picker session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Bookmark load still in flight; nothing interactive yet
    #[default]
    Loading,
    /// Entries available, normal interaction
    Ready,
}

/// How the user is currently driving the list
///
/// Hover only moves the highlight while in `Pointer` mode; any keypress
/// switches back to `Keyboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Keyboard,
    Pointer,
}

/// The highlighted position within the filtered list
///
/// Either nothing (filtered list is empty) or an index that is always in
/// `0..len`. Directional moves clamp at both ends instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    At(usize),
}

impl Selection {
    /// Current index, if any
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::At(i) => Some(*i),
        }
    }

    /// Unconditional reset: first position when the list is non-empty
    pub const fn reset(&mut self, len: usize) {
        *self = if len == 0 { Self::None } else { Self::At(0) };
    }

    /// Move one forward, clamped at the last position
    pub const fn forward(&mut self, len: usize) {
        if let Self::At(i) = *self {
            if i + 1 < len {
                *self = Self::At(i + 1);
            }
        }
    }

    /// Move one backward, clamped at zero
    pub const fn backward(&mut self) {
        if let Self::At(i) = *self {
            if i > 0 {
                *self = Self::At(i - 1);
            }
        }
    }

    /// Jump directly to `idx` (pointer hover); ignored when out of range
    pub const fn jump(&mut self, idx: usize, len: usize) {
        if idx < len {
            *self = Self::At(idx);
        }
    }
}

/// Message severity for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Transient per-entry "copied" indicator
#[derive(Debug, Clone, Copy)]
pub struct CopiedFlash {
    /// Index into `entries` of the copied entry
    pub entry: u32,
    pub at: Instant,
}

/// All mutable state for one picker session
#[derive(Debug)]
pub struct PickerState {
    /// Flattened bookmark list, set once the load completes
    pub entries: Vec<BookmarkEntry>,
    /// Indices into `entries` matching the current query
    pub filtered: Vec<u32>,
    /// Highlight within `filtered`
    pub selection: Selection,
    /// Keyboard- vs pointer-driven interaction
    pub mode: InteractionMode,
    /// Loading vs ready
    pub phase: Phase,
    /// Current search query
    pub query: String,
    /// Cursor position within the query string, in bytes
    pub query_cursor: usize,
    /// Status messages with TTL expiry
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    /// Active "copied" indicator, if any
    pub copied: Option<CopiedFlash>,
    /// When set, the blank tab is requested at this instant and the
    /// picker exits
    pub pending_blank_open: Option<Instant>,
    pub should_exit: bool,
    pub aborted: bool,
    /// Scroll offset for the entry list
    pub scroll_offset: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Screen row of the first list row (set during render, used for
    /// pointer hit-testing)
    pub list_top: u16,
}

impl PickerState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            filtered: Vec::new(),
            selection: Selection::None,
            mode: InteractionMode::Keyboard,
            phase: Phase::Loading,
            query: String::new(),
            query_cursor: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            copied: None,
            pending_blank_open: None,
            should_exit: false,
            aborted: false,
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            list_top: 0,
        }
    }

    /// Install the loaded entries and leave the loading phase
    pub fn set_entries(&mut self, entries: Vec<BookmarkEntry>) {
        #[allow(clippy::cast_possible_truncation)]
        let filtered: Vec<u32> = (0..entries.len() as u32).collect();
        self.entries = entries;
        self.phase = Phase::Ready;
        self.set_filtered(filtered);
    }

    /// Replace the filtered view. The selection resets to the first
    /// position unconditionally, so a stale index can never survive a
    /// shrinking result set.
    pub fn set_filtered(&mut self, filtered: Vec<u32>) {
        self.filtered = filtered;
        self.selection.reset(self.filtered.len());
        self.scroll_offset = 0;
    }

    /// The currently highlighted entry
    #[must_use]
    pub fn current_entry(&self) -> Option<&BookmarkEntry> {
        self.selection
            .index()
            .and_then(|i| self.filtered.get(i))
            .and_then(|&idx| self.entries.get(idx as usize))
    }

    /// Move the highlight one down (clamped)
    pub fn move_forward(&mut self) {
        self.selection.forward(self.filtered.len());
        self.adjust_scroll();
    }

    /// Move the highlight one up (clamped)
    pub fn move_backward(&mut self) {
        self.selection.backward();
        self.adjust_scroll();
    }

    /// Move down by one page
    pub fn page_forward(&mut self) {
        if let Selection::At(i) = self.selection {
            let last = self.filtered.len().saturating_sub(1);
            self.selection = Selection::At((i + self.visible_height).min(last));
            self.adjust_scroll();
        }
    }

    /// Move up by one page
    pub fn page_backward(&mut self) {
        if let Selection::At(i) = self.selection {
            self.selection = Selection::At(i.saturating_sub(self.visible_height));
            self.adjust_scroll();
        }
    }

    /// Jump to the first entry
    pub fn jump_to_start(&mut self) {
        if !self.filtered.is_empty() {
            self.selection = Selection::At(0);
            self.adjust_scroll();
        }
    }

    /// Jump to the last entry
    pub fn jump_to_end(&mut self) {
        if !self.filtered.is_empty() {
            self.selection = Selection::At(self.filtered.len() - 1);
            self.adjust_scroll();
        }
    }

    /// Pointer hover over a screen row: move the highlight to that row's
    /// entry, bypassing the directional clamp logic
    pub fn hover_row(&mut self, row: u16) {
        if row < self.list_top {
            return;
        }
        let offset = (row - self.list_top) as usize;
        if offset >= self.visible_height {
            return;
        }
        let idx = self.scroll_offset + offset;
        self.selection.jump(idx, self.filtered.len());
    }

    /// Keep the highlight inside the viewport
    fn adjust_scroll(&mut self) {
        let Some(idx) = self.selection.index() else {
            self.scroll_offset = 0;
            return;
        };
        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if self.visible_height > 0 && idx >= self.scroll_offset + self.visible_height {
            self.scroll_offset = idx.saturating_sub(self.visible_height - 1);
        }
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Move the query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Whether the copied indicator is active for the given entry index
    #[must_use]
    pub fn copied_flash_active(&self, entry_idx: u32, duration: Duration) -> bool {
        self.copied
            .is_some_and(|flash| flash.entry == entry_idx && flash.at.elapsed() < duration)
    }

    /// Mark the picker to exit as aborted
    pub fn abort(&mut self) {
        self.should_exit = true;
        self.aborted = true;
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::{BookmarkEntry, EntryKind};

    fn make_entries(count: usize) -> Vec<BookmarkEntry> {
        (0..count)
            .map(|i| BookmarkEntry {
                id: format!("{i}"),
                title: format!("Entry {i}"),
                address: format!("https://example.com/{i}"),
                kind: EntryKind::Web,
            })
            .collect()
    }

    fn ready_state(count: usize) -> PickerState {
        let mut state = PickerState::new();
        state.set_entries(make_entries(count));
        state
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut state = ready_state(3);
        assert_eq!(state.selection, Selection::At(0));

        state.move_backward();
        assert_eq!(state.selection, Selection::At(0));

        state.move_forward();
        state.move_forward();
        assert_eq!(state.selection, Selection::At(2));

        // No wraparound past the last position
        state.move_forward();
        assert_eq!(state.selection, Selection::At(2));
    }

    #[test]
    fn test_selection_none_on_empty() {
        let mut state = ready_state(0);
        assert_eq!(state.selection, Selection::None);

        // Directional input on an empty list is a no-op
        state.move_forward();
        state.move_backward();
        assert_eq!(state.selection, Selection::None);
        assert!(state.current_entry().is_none());
    }

    #[test]
    fn test_filtered_change_resets_selection() {
        let mut state = ready_state(5);
        state.move_forward();
        state.move_forward();
        assert_eq!(state.selection, Selection::At(2));

        // Shrinking result set: never a stale index
        state.set_filtered(vec![4]);
        assert_eq!(state.selection, Selection::At(0));
        assert_eq!(state.current_entry().unwrap().id, "4");

        state.set_filtered(Vec::new());
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn test_selection_always_in_range() {
        let mut state = ready_state(4);
        state.jump_to_end();
        state.page_forward();
        let idx = state.selection.index().unwrap();
        assert!(idx < state.filtered.len());
    }

    #[test]
    fn test_hover_jumps_directly() {
        let mut state = ready_state(10);
        state.list_top = 4;
        state.visible_height = 5;

        state.hover_row(6);
        assert_eq!(state.selection, Selection::At(2));

        // Rows outside the list area are ignored
        state.hover_row(2);
        assert_eq!(state.selection, Selection::At(2));
        state.hover_row(40);
        assert_eq!(state.selection, Selection::At(2));
    }

    #[test]
    fn test_hover_respects_scroll() {
        let mut state = ready_state(30);
        state.list_top = 1;
        state.visible_height = 10;
        state.scroll_offset = 15;

        state.hover_row(3);
        assert_eq!(state.selection, Selection::At(17));
    }

    #[test]
    fn test_query_editing() {
        let mut state = PickerState::new();

        for c in "hello".chars() {
            state.query_push(c);
        }
        assert_eq!(state.query, "hello");
        assert_eq!(state.query_cursor, 5);

        state.query_backspace();
        assert_eq!(state.query, "hell");

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 2);

        state.query_push('y');
        assert_eq!(state.query, "heyll");

        state.query_clear();
        assert!(state.query.is_empty());
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_copied_flash_expiry() {
        let mut state = ready_state(2);
        state.copied = Some(CopiedFlash {
            entry: 1,
            at: Instant::now(),
        });

        assert!(state.copied_flash_active(1, Duration::from_millis(700)));
        assert!(!state.copied_flash_active(0, Duration::from_millis(700)));
        assert!(!state.copied_flash_active(1, Duration::ZERO));
    }
}
