//! Footer Widget
//!
//! Key hints plus the scroll position of the output.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::app::Viewport;
use crate::tui::theme::Theme;

pub struct Footer<'a> {
    viewport: &'a Viewport,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(viewport: &'a Viewport, theme: &'a Theme) -> Self {
        Self { viewport, theme }
    }
}

/// Percentage of the output scrolled past, 100 when everything fits
fn scroll_percent(viewport: &Viewport) -> usize {
    let max = viewport.max_scroll();
    if max == 0 {
        100
    } else {
        viewport.scroll() * 100 / max
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                "    press esc or ctrl+c to exit · tab to switch focus · ↑/↓ to scroll",
                self.theme.muted_style(),
            ),
            Span::styled(
                format!("  {:>3}%", scroll_percent(self.viewport)),
                self.theme.muted_style(),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
