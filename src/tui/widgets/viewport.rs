//! Output View Widget
//!
//! Draws the visible slice of the output viewport.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget},
};

use crate::tui::app::Viewport;

pub struct OutputView<'a> {
    viewport: &'a Viewport,
}

impl<'a> OutputView<'a> {
    pub fn new(viewport: &'a Viewport) -> Self {
        Self { viewport }
    }
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(self.viewport.visible_lines().to_vec());
        Paragraph::new(text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::text::Line;
    use ratatui::Terminal;

    #[test]
    fn test_renders_from_scroll_offset() {
        let mut viewport = Viewport::new(20, 2);
        viewport.set_content(vec![
            Line::from("first"),
            Line::from("second"),
            Line::from("third"),
        ]);
        viewport.scroll_down(1);

        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        terminal
            .draw(|f| f.render_widget(OutputView::new(&viewport), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..20)
            .map(|x| buffer.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        let bottom: String = (0..20)
            .map(|x| buffer.cell((x, 1)).unwrap().symbol().to_string())
            .collect();
        assert!(top.starts_with("second"));
        assert!(bottom.starts_with("third"));
    }
}
