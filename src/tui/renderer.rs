//! TUI Renderer - draws AppState into the terminal
//!
//! Layout, top to bottom: header, gap, output viewport, gap, spinner and
//! input box, gap, footer.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::{Frame, Terminal};

use super::app::{AppState, Focus};
use super::widgets::{Footer, Header, InputWidget, OutputView};

/// Width of the spinner column left of the input box
const SPINNER_WIDTH: u16 = 2;

/// TUI Renderer implementation
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Get reference to terminal (for testing)
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Current terminal size (cols, rows)
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Render one frame
    pub fn render(&mut self, state: &AppState) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, state))?;
        Ok(())
    }
}

/// Draw the whole UI for `state`
pub fn draw(frame: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1),
            Constraint::Length(state.output.height), // Output
            Constraint::Length(1),
            Constraint::Length(3), // Input
            Constraint::Length(1),
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(Header::new(&state.config.app_name, theme), chunks[0]);
    frame.render_widget(OutputView::new(&state.output), chunks[2]);

    let input_row = chunks[4];
    let spinner_area = Rect {
        width: SPINNER_WIDTH.min(input_row.width),
        ..input_row
    };
    let input_area = Rect {
        x: input_row.x + spinner_area.width,
        width: state
            .input_width
            .min(input_row.width.saturating_sub(spinner_area.width)),
        ..input_row
    };

    if state.busy() && spinner_area.width > 0 {
        let spinner = Span::styled(state.spinner_frame(), Style::default().fg(theme.spinner));
        frame.render_widget(
            spinner,
            Rect {
                y: spinner_area.y + spinner_area.height / 2,
                height: 1.min(spinner_area.height),
                ..spinner_area
            },
        );
    }

    let input = InputWidget::new(state.input.text(), state.input.cursor(), theme)
        .placeholder(&state.config.placeholder)
        .focused(state.focus == Focus::Input);
    frame.render_widget(input, input_area);

    frame.render_widget(Footer::new(&state.output, theme), chunks[6]);
}
