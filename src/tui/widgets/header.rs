//! Header Widget
//!
//! Title line: "Welcome to <app name>"

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Header widget showing the application name
pub struct Header<'a> {
    app_name: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Create a new header widget
    pub fn new(app_name: &'a str, theme: &'a Theme) -> Self {
        Self { app_name, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let header_text = Line::from(vec![
            Span::styled("Welcome to ", self.theme.title_style()),
            Span::styled(format!("{} 🐈", self.app_name), self.theme.app_name_style()),
        ]);

        Paragraph::new(header_text).render(area, buf);
    }
}
