//! Input Widget
//!
//! Single-line prompt box with a block cursor. Text wider than the box
//! scrolls horizontally so the cursor stays visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// Input widget for user text entry
pub struct InputWidget<'a> {
    /// Current input text
    content: &'a str,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Whether the input is focused
    focused: bool,
    /// Theme for styling
    theme: &'a Theme,
    /// Placeholder text
    placeholder: &'a str,
}

impl<'a> InputWidget<'a> {
    /// Create a new input widget
    pub fn new(content: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            content,
            cursor,
            focused: false,
            theme,
            placeholder: "Type a message...",
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Drop leading characters until `before` fits in `room` columns
fn visible_tail(before: &str, room: usize) -> &str {
    let mut start = 0;
    while before[start..].width() > room {
        match before[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    &before[start..]
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        let text_style = Style::default().fg(self.theme.text_primary);
        let cursor_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            text_style
        };

        let text = if self.content.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(self.placeholder, self.theme.muted_style()));
            Line::from(spans)
        } else {
            let (before, after) = self.content.split_at(self.cursor.min(self.content.len()));
            let cursor_char = after.chars().next().unwrap_or(' ');
            let after_cursor = after.get(cursor_char.len_utf8()..).unwrap_or("");
            // Keep one column for the cursor itself
            let before = visible_tail(before, (inner.width as usize).saturating_sub(1));

            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled(cursor_char.to_string(), cursor_style),
                Span::styled(after_cursor, text_style),
            ])
        };

        Paragraph::new(text).render(inner, buf);
    }
}
