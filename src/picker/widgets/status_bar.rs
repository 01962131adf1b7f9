//! Status bar widget for messages and the interaction mode indicator

use crate::picker::state::{InteractionMode, MessageLevel, StatusMessage};
use crate::picker::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the most recent message
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
    mode: InteractionMode,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        theme: &'a Theme,
        mode: InteractionMode,
    ) -> Self {
        Self {
            messages,
            theme,
            mode,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(inner);

        // Left: most recent active message
        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let prefix = Self::prefix_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        // Right: interaction mode indicator
        let indicator = match self.mode {
            InteractionMode::Keyboard => "[Keyboard]",
            InteractionMode::Pointer => "[Pointer]",
        };
        let indicator_style = self.theme.info_style().add_modifier(Modifier::DIM);
        Paragraph::new(Line::styled(indicator, indicator_style)).render(chunks[1], buf);
    }
}
