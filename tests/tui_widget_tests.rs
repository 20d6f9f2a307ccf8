//! TUI Widget Unit Tests
//!
//! Tests individual widgets in isolation
//!
//! Run: cargo test --test tui_widget_tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Terminal;
use meow_cli::tui::app::Viewport;
use meow_cli::tui::widgets::*;
use meow_cli::tui::Theme;

/// Helper to render a widget and capture buffer
fn render_widget<W>(widget: W, width: u16, height: u16) -> String
where
    W: ratatui::widgets::Widget,
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            let area = Rect {
                x: 0,
                y: 0,
                width,
                height,
            };
            f.render_widget(widget, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let mut result = String::new();
    for y in 0..height {
        for x in 0..width {
            result.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        result.push('\n');
    }
    result
}

// ============================================================================
// INPUT WIDGET TESTS
// ============================================================================

#[test]
fn test_input_widget_with_text() {
    let theme = Theme::default();
    let widget = InputWidget::new("Hello world", 5, &theme);
    let output = render_widget(widget, 80, 3);

    assert!(output.contains("Hello world"), "Input should display text");
}

#[test]
fn test_input_widget_empty() {
    let theme = Theme::default();
    let widget = InputWidget::new("", 0, &theme);
    let output = render_widget(widget, 80, 3);

    assert!(output.contains('┌') && output.contains('─'));
    assert!(output.contains("Type a message..."));
}

// ============================================================================
// HEADER TESTS
// ============================================================================

#[test]
fn test_header_renders() {
    let theme = Theme::default();
    let widget = Header::new("MeowCLI", &theme);
    let output = render_widget(widget, 80, 1);

    assert!(output.contains("Welcome to MeowCLI"), "Header should show title");
}

// ============================================================================
// OUTPUT TESTS
// ============================================================================

#[test]
fn test_markdown_in_output_view() {
    let renderer = MarkdownRenderer::new(Theme::default(), 40).unwrap();
    let lines = renderer
        .render("# Answer\n\nUse `cargo run` then:\n\n- step one\n- step two")
        .unwrap();

    let mut viewport = Viewport::new(40, 10);
    viewport.set_content(lines);
    let output = render_widget(OutputView::new(&viewport), 40, 10);

    assert!(output.contains("Answer"));
    assert!(output.contains("Use cargo run then:"));
    assert!(output.contains("• step one"));
    assert!(output.contains("• step two"));
}

#[test]
fn test_output_view_clips_to_height() {
    let mut viewport = Viewport::new(20, 2);
    viewport.set_content(vec![Line::from("a"), Line::from("b"), Line::from("c")]);
    let output = render_widget(OutputView::new(&viewport), 20, 3);

    assert!(output.starts_with('a'));
    assert!(!output.contains('c'));
}

// ============================================================================
// FOOTER TESTS
// ============================================================================

#[test]
fn test_footer_shows_exit_hint() {
    let theme = Theme::default();
    let viewport = Viewport::new(80, 10);
    let output = render_widget(Footer::new(&viewport, &theme), 120, 1);

    assert!(output.contains("press esc or ctrl+c to exit"));
    assert!(output.contains("100%"));
}
