//! Entry list widget
//!
//! Displays the filtered bookmark entries with the highlight, the
//! privileged-entry marker, and the transient copied indicator. The
//! loading and empty states render inside the list region so the search
//! field above stays usable.

use crate::bookmarks::BookmarkEntry;
use crate::picker::state::{Phase, PickerState};
use crate::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};
use std::time::Duration;

/// Entry list widget
pub struct EntryList<'a> {
    state: &'a PickerState,
    theme: &'a Theme,
    /// How long the copied checkmark stays visible
    copied_flash: Duration,
    title: String,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list widget
    #[must_use]
    pub fn new(state: &'a PickerState, theme: &'a Theme, copied_flash: Duration) -> Self {
        let filtered = state.filtered.len();
        let total = state.entries.len();
        let title = format!(" Bookmarks ({filtered}/{total}) ");

        Self {
            state,
            theme,
            copied_flash,
            title,
        }
    }

    /// Message shown inside the list region when there is nothing to list
    fn empty_message(&self) -> Option<&'static str> {
        match self.state.phase {
            Phase::Loading => Some("Loading bookmarks…"),
            Phase::Ready if self.state.entries.is_empty() => Some("No bookmarks found"),
            Phase::Ready if self.state.filtered.is_empty() => Some("No matches"),
            Phase::Ready => None,
        }
    }

    /// Render a single entry row
    fn render_entry(&self, entry: &BookmarkEntry, entry_idx: u32, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        // Marker column: copied checkmark wins over the privileged glyph
        let marker = if self.state.copied_flash_active(entry_idx, self.copied_flash) {
            Span::styled("✓", self.theme.success_style())
        } else if entry.is_privileged() {
            Span::styled("⧉", self.theme.privileged_style())
        } else {
            Span::raw(" ")
        };

        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            marker,
            Span::raw(" "),
            Span::styled(entry.display_title().to_string(), text_style),
        ];

        // Address shown dimmed after the title, unless it already is the title
        if !entry.title.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(entry.address.clone(), self.theme.dimmed_style()));
        }

        let line = Line::from(spans);
        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if let Some(message) = self.empty_message() {
            let line = Line::from(Span::styled(message, self.theme.dimmed_style()));
            Paragraph::new(line).render(inner, buf);
            return;
        }

        // Visible slice of the filtered list
        let visible_height = inner.height as usize;
        let start = self.state.scroll_offset;
        let end = (start + visible_height).min(self.state.filtered.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|visible_idx| {
                let entry_idx = *self.state.filtered.get(visible_idx)?;
                let entry = self.state.entries.get(entry_idx as usize)?;
                let is_cursor = self.state.selection.index() == Some(visible_idx);
                Some(self.render_entry(entry, entry_idx, is_cursor))
            })
            .collect();

        let list = List::new(items);
        list.render(inner, buf);
    }
}
