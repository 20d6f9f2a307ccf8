//! TUI Application - state and message dispatch
//!
//! `AppState::update` is the single place state changes. It performs no I/O:
//! work that has to leave the loop (the generation request) comes back as a
//! [`Command`] for the controller to run.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::Line;

use super::events::AppEvent;
use super::theme::Theme;
use super::widgets::markdown::{plain_lines, MarkdownRenderer, RenderError};
use crate::config::UiConfig;
use crate::llm::LlmError;

/// Braille dot spinner
pub const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

const WELCOME_TEXT: &str = "I'm ready to help! Ask me to write some code.";

/// Rows taken by everything except the output viewport
const CHROME_HEIGHT: u16 = 8;

/// Request phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// One generation request is outstanding
    Awaiting,
}

/// Which widget receives ordinary keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Output,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }
}

/// Side effects requested by [`AppState::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the prompt to the generator and report back with `AppEvent::Completed`
    Generate(String),
}

/// What the output viewport shows, kept unrendered so it can be re-flowed
/// when the terminal width changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSource {
    /// Plain text such as the welcome message
    Notice(String),
    /// Markdown answer from the generator
    Answer(String),
    /// Error text, drawn in the error colour
    Error(String),
}

/// Single-line prompt editor bounded by a character limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    text: String,
    /// Byte offset, always on a char boundary
    cursor: usize,
    char_limit: usize,
}

impl InputState {
    pub fn new(char_limit: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor; ignored once the limit is reached
    pub fn insert_char(&mut self, c: char) {
        if self.text.chars().count() >= self.char_limit {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn delete_char_before(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().last() {
            self.text.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete character under cursor
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().last() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the current text, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Scrollable output region
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    lines: Vec<Line<'static>>,
    scroll: usize,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            lines: Vec::new(),
            scroll: 0,
            width,
            height,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Replace the content and return to the top
    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.scroll = 0;
    }

    /// Replace the content with a re-wrapped copy, keeping the scroll offset
    pub fn reflow(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.scroll = self.scroll();
    }

    /// Scroll offset clamped to the current content and height
    pub fn scroll(&self) -> usize {
        self.scroll.min(self.max_scroll())
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll().saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll() + n).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1) as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1) as usize);
    }

    pub fn to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Lines currently inside the viewport
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let start = self.scroll().min(self.lines.len());
        let end = (start + self.height as usize).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Whole output as plain text
    pub fn plain_text(&self) -> String {
        super::widgets::markdown::lines_to_plain(&self.lines)
    }
}

/// Application state for the TUI
#[derive(Debug, Clone)]
pub struct AppState {
    /// Prompt being typed
    pub input: InputState,
    /// Rendered output of the last response or error
    pub output: Viewport,
    /// Unrendered text behind `output`
    pub source: OutputSource,
    pub phase: Phase,
    /// Spinner animation counter, advanced only while awaiting
    pub spinner_phase: usize,
    /// Width of the input box
    pub input_width: u16,
    pub focus: Focus,
    /// Whether the application should exit
    pub should_quit: bool,
    pub theme: Theme,
    pub config: UiConfig,
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        let mut state = Self {
            input: InputState::new(config.char_limit),
            output: Viewport::new(80, 20),
            source: OutputSource::Notice(WELCOME_TEXT.to_string()),
            phase: Phase::Idle,
            spinner_phase: 0,
            input_width: 50,
            focus: Focus::Input,
            should_quit: false,
            theme: Theme::DEFAULT,
            config,
        };
        let lines = state.render_output();
        state.output.set_content(lines);
        state
    }

    pub fn busy(&self) -> bool {
        self.phase == Phase::Awaiting
    }

    /// Current spinner glyph
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_phase % SPINNER_FRAMES.len()]
    }

    /// Dispatch one event, returning any work the controller must start
    pub fn update(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(width, height) => {
                self.set_terminal_size(width, height);
                None
            }
            AppEvent::Tick => {
                if self.busy() {
                    self.spinner_phase = self.spinner_phase.wrapping_add(1);
                }
                None
            }
            AppEvent::Completed(result) => {
                self.complete(result);
                None
            }
            // Fatal to the loop; the controller stops before dispatching it
            AppEvent::TerminalError(_) => None,
        }
    }

    /// Recompute viewport and input geometry from the terminal size
    pub fn set_terminal_size(&mut self, cols: u16, rows: u16) {
        let width_changed = self.output.width != cols;
        self.output.width = cols;
        self.output.height = rows.saturating_sub(CHROME_HEIGHT);
        self.input_width = cols.saturating_sub(4);
        if width_changed {
            let lines = self.render_output();
            self.output.reflow(lines);
        }
    }

    /// Wrap width for the output: the configured width, narrowed to the viewport
    pub fn wrap_width(&self) -> usize {
        self.config.word_wrap.min(self.output.width as usize)
    }

    /// Signal application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.quit();
                return None;
            }
            (KeyCode::Enter, _) => return self.submit(),
            (KeyCode::Tab, _) => {
                self.focus = self.focus.toggle();
                return None;
            }
            (KeyCode::Up, _) => self.output.scroll_up(1),
            (KeyCode::Down, _) => self.output.scroll_down(1),
            (KeyCode::PageUp, _) => self.output.page_up(),
            (KeyCode::PageDown, _) => self.output.page_down(),
            _ => match self.focus {
                Focus::Input => self.edit_input(key),
                Focus::Output => self.navigate_output(key),
            },
        }
        None
    }

    fn edit_input(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.input.clear(),
            (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => {
                self.input.move_home()
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => {
                self.input.move_end()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.input.insert_char(c)
            }
            (KeyCode::Backspace, _) => self.input.delete_char_before(),
            (KeyCode::Delete, _) => self.input.delete_char_at(),
            (KeyCode::Left, _) => self.input.move_left(),
            (KeyCode::Right, _) => self.input.move_right(),
            _ => {}
        }
    }

    fn navigate_output(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') => self.output.scroll_up(1),
            KeyCode::Char('j') => self.output.scroll_down(1),
            KeyCode::Char('u') => self.output.scroll_up((self.output.height / 2).max(1) as usize),
            KeyCode::Char('d') | KeyCode::Char(' ') => {
                self.output.scroll_down((self.output.height / 2).max(1) as usize)
            }
            KeyCode::Char('g') | KeyCode::Home => self.output.to_top(),
            KeyCode::Char('G') | KeyCode::End => self.output.to_bottom(),
            _ => {}
        }
    }

    /// Snapshot the prompt and start a request, unless one is outstanding
    fn submit(&mut self) -> Option<Command> {
        if self.busy() {
            tracing::debug!("Ignoring submit while a request is outstanding");
            return None;
        }
        if self.input.text().trim().is_empty() {
            return None;
        }

        let prompt = self.input.take();
        self.phase = Phase::Awaiting;
        self.spinner_phase = 0;
        tracing::info!(prompt_len = prompt.len(), "Submitting prompt");
        Some(Command::Generate(prompt))
    }

    fn complete(&mut self, result: Result<String, LlmError>) {
        if !self.busy() {
            tracing::warn!("Dropping completion with no outstanding request");
            return;
        }
        self.phase = Phase::Idle;

        self.source = match result {
            Ok(text) => OutputSource::Answer(text),
            Err(e) => {
                if e.is_missing_credential() {
                    tracing::warn!("No API key set, request was not sent: {}", e);
                } else {
                    tracing::warn!("Generation failed: {}", e);
                }
                OutputSource::Error(format!("Error: {}", e))
            }
        };
        let lines = self.render_output();
        self.output.set_content(lines);
    }

    /// Render `source` at the current wrap width
    fn render_output(&self) -> Vec<Line<'static>> {
        let width = self.wrap_width();
        let error_style = Style::default().fg(self.theme.error);
        match &self.source {
            OutputSource::Notice(text) => {
                plain_lines(text, Style::default().fg(self.theme.text_primary), width)
            }
            OutputSource::Answer(text) => match render_markdown(&self.theme, width, text) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!("Error rendering markdown: {}", e);
                    plain_lines(&format!("Error rendering response: {}", e), error_style, width)
                }
            },
            OutputSource::Error(message) => plain_lines(message, error_style, width),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

/// Build a renderer for the given width and render `text` with it
pub fn render_markdown(
    theme: &Theme,
    wrap_width: usize,
    text: &str,
) -> Result<Vec<Line<'static>>, RenderError> {
    MarkdownRenderer::new(*theme, wrap_width)?.render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Text with all whitespace removed, to compare content across re-wraps
    fn non_blank(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert_eq!(state.update(key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_initial_state_shows_welcome() {
        let state = AppState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.busy());
        assert!(state.input.is_empty());
        assert!(state.output.plain_text().contains("ready to help"));
    }

    #[test]
    fn test_submit_moves_to_awaiting() {
        let mut state = AppState::default();
        type_text(&mut state, "hello");
        assert_eq!(state.input.text(), "hello");

        let cmd = state.update(key(KeyCode::Enter));
        assert_eq!(cmd, Some(Command::Generate("hello".to_string())));
        assert_eq!(state.phase, Phase::Awaiting);
        assert!(state.busy());
        assert!(state.input.is_empty());
        assert_eq!(state.input.cursor(), 0);
    }

    #[test]
    fn test_submit_while_awaiting_is_ignored() {
        let mut state = AppState::default();
        type_text(&mut state, "first");
        state.update(key(KeyCode::Enter));
        type_text(&mut state, "second");

        let before_input = state.input.clone();
        let before_output = state.output.clone();
        assert_eq!(state.update(key(KeyCode::Enter)), None);
        assert_eq!(state.phase, Phase::Awaiting);
        assert_eq!(state.input, before_input);
        assert_eq!(state.output, before_output);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut state = AppState::default();
        assert_eq!(state.update(key(KeyCode::Enter)), None);
        type_text(&mut state, "   ");
        assert_eq!(state.update(key(KeyCode::Enter)), None);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.input.text(), "   ");
    }

    #[test]
    fn test_success_completion_renders_markdown() {
        let mut state = AppState::default();
        type_text(&mut state, "hello");
        state.update(key(KeyCode::Enter));

        state.update(AppEvent::Completed(Ok("**Hi** there".to_string())));
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.busy());
        assert_eq!(state.output.plain_text(), "Hi there");
    }

    #[test]
    fn test_error_completion_shows_error() {
        let mut state = AppState::default();
        type_text(&mut state, "hello");
        state.update(key(KeyCode::Enter));

        state.update(AppEvent::Completed(Err(LlmError::MissingCredential(
            "GEMINI_API_KEY".to_string(),
        ))));
        assert_eq!(state.phase, Phase::Idle);
        let text = state.output.plain_text();
        assert!(text.starts_with("Error: API key not found"), "got {text}");
        assert!(text.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_render_failure_falls_back_to_error_text() {
        let mut state = AppState::default();
        type_text(&mut state, "hello");
        state.update(key(KeyCode::Enter));

        state.update(AppEvent::Completed(Ok("bell \x07".to_string())));
        assert_eq!(state.phase, Phase::Idle);
        assert!(state
            .output
            .plain_text()
            .starts_with("Error rendering response: content contains control character"));
    }

    #[test]
    fn test_zero_wrap_width_is_a_render_failure() {
        let mut state = AppState::new(UiConfig {
            word_wrap: 0,
            ..UiConfig::default()
        });
        type_text(&mut state, "hello");
        state.update(key(KeyCode::Enter));
        state.update(AppEvent::Completed(Ok("fine".to_string())));

        assert!(state
            .output
            .plain_text()
            .starts_with("Error rendering response: wrap width"));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = AppState::default();
        let before = state.output.clone();
        state.update(AppEvent::Completed(Ok("late".to_string())));
        assert_eq!(state.output, before);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_tick_only_animates_while_busy() {
        let mut state = AppState::default();
        state.update(AppEvent::Tick);
        assert_eq!(state.spinner_phase, 0);

        type_text(&mut state, "hi");
        state.update(key(KeyCode::Enter));
        state.update(AppEvent::Tick);
        state.update(AppEvent::Tick);
        assert_eq!(state.spinner_phase, 2);
        assert_eq!(state.spinner_frame(), SPINNER_FRAMES[2]);
    }

    #[test]
    fn test_resize_updates_geometry() {
        let mut state = AppState::default();
        state.update(AppEvent::Resize(120, 40));
        assert_eq!(state.output.width, 120);
        assert_eq!(state.output.height, 32);
        assert_eq!(state.input_width, 116);

        state.update(AppEvent::Resize(3, 5));
        assert_eq!(state.output.height, 0);
        assert_eq!(state.input_width, 0);
    }

    #[test]
    fn test_answer_wraps_to_narrow_viewport() {
        let mut state = AppState::default();
        state.update(AppEvent::Resize(80, 24));
        assert_eq!(state.wrap_width(), 80);
        type_text(&mut state, "q");
        state.update(key(KeyCode::Enter));

        let answer = format!("{}TAILWORD", "word ".repeat(17));
        state.update(AppEvent::Completed(Ok(answer.clone())));

        assert_eq!(state.source, OutputSource::Answer(answer));
        assert_eq!(state.output.lines().len(), 2);
        assert!(state.output.lines().iter().all(|l| l.width() <= 80));
        assert!(state.output.plain_text().ends_with("TAILWORD"));
    }

    #[test]
    fn test_resize_reflows_output() {
        let mut state = AppState::default();
        state.update(AppEvent::Resize(120, 40));
        type_text(&mut state, "q");
        state.update(key(KeyCode::Enter));
        let answer = "alpha beta gamma delta epsilon zeta eta theta iota kappa".to_string();
        state.update(AppEvent::Completed(Ok(answer)));
        assert_eq!(state.output.lines().len(), 1);
        let text = non_blank(&state.output.plain_text());

        state.update(AppEvent::Resize(20, 40));
        assert!(state.output.lines().len() > 1);
        assert!(state.output.lines().iter().all(|l| l.width() <= 20));
        assert_eq!(non_blank(&state.output.plain_text()), text);

        state.update(AppEvent::Resize(120, 40));
        assert_eq!(state.output.lines().len(), 1);
    }

    #[test]
    fn test_error_text_reflows_too() {
        let mut state = AppState::default();
        type_text(&mut state, "q");
        state.update(key(KeyCode::Enter));
        state.update(AppEvent::Completed(Err(LlmError::ConnectionFailure(
            "tcp connect error: connection refused".to_string(),
        ))));

        state.update(AppEvent::Resize(16, 30));
        assert!(state.output.lines().iter().all(|l| l.width() <= 16));
        assert!(state.output.plain_text().starts_with("Error: "));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::default();
        state.update(key(KeyCode::Esc));
        assert!(state.should_quit);

        let mut state = AppState::default();
        state.update(ctrl('c'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_quit_while_awaiting() {
        let mut state = AppState::default();
        type_text(&mut state, "hi");
        state.update(key(KeyCode::Enter));
        state.update(key(KeyCode::Esc));
        assert!(state.should_quit);
    }

    #[test]
    fn test_typing_allowed_while_awaiting() {
        let mut state = AppState::default();
        type_text(&mut state, "hi");
        state.update(key(KeyCode::Enter));
        type_text(&mut state, "next");
        assert_eq!(state.input.text(), "next");
    }

    #[test]
    fn test_input_editing() {
        let mut state = AppState::default();
        type_text(&mut state, "héllo");
        state.update(key(KeyCode::Left));
        state.update(key(KeyCode::Left));
        state.update(key(KeyCode::Backspace));
        assert_eq!(state.input.text(), "hélo");

        state.update(key(KeyCode::Home));
        state.update(key(KeyCode::Delete));
        assert_eq!(state.input.text(), "élo");

        state.update(key(KeyCode::End));
        type_text(&mut state, "!");
        assert_eq!(state.input.text(), "élo!");

        state.update(ctrl('u'));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_char_limit() {
        let mut state = AppState::new(UiConfig {
            char_limit: 3,
            ..UiConfig::default()
        });
        type_text(&mut state, "abcdef");
        assert_eq!(state.input.text(), "abc");
    }

    #[test]
    fn test_scrolling() {
        let mut state = AppState::default();
        state.update(AppEvent::Resize(80, 13)); // 5 visible rows
        type_text(&mut state, "q");
        state.update(key(KeyCode::Enter));
        let body = (1..=12).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n\n");
        state.update(AppEvent::Completed(Ok(body)));
        assert_eq!(state.output.scroll(), 0);

        state.update(key(KeyCode::Down));
        assert_eq!(state.output.scroll(), 1);
        state.update(key(KeyCode::PageDown));
        assert_eq!(state.output.scroll(), 6);
        state.update(key(KeyCode::Up));
        assert_eq!(state.output.scroll(), 5);

        // Navigation letters only scroll once the output is focused
        state.update(key(KeyCode::Char('G')));
        assert_eq!(state.input.text(), "G");
        state.update(key(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Output);
        state.update(key(KeyCode::Char('G')));
        assert_eq!(state.output.scroll(), state.output.max_scroll());
        state.update(key(KeyCode::Char('g')));
        assert_eq!(state.output.scroll(), 0);
        state.update(key(KeyCode::Char('x')));
        assert_eq!(state.input.text(), "G");
    }

    #[test]
    fn test_viewport_scroll_is_clamped() {
        let mut viewport = Viewport::new(10, 3);
        viewport.set_content((0..5).map(|i| Line::from(i.to_string())).collect());
        viewport.scroll_down(100);
        assert_eq!(viewport.scroll(), 2);
        assert_eq!(viewport.visible_lines().len(), 3);

        viewport.height = 10;
        assert_eq!(viewport.scroll(), 0);
        assert_eq!(viewport.visible_lines().len(), 5);
    }

    proptest! {
        #[test]
        fn prop_resize_only_changes_geometry(
            prompt in "[a-z]{1,10}",
            busy in any::<bool>(),
            width in any::<u16>(),
            height in any::<u16>(),
        ) {
            let mut state = AppState::default();
            type_text(&mut state, &prompt);
            if busy {
                state.update(key(KeyCode::Enter));
                type_text(&mut state, &prompt);
            }
            let input = state.input.clone();
            let source = state.source.clone();
            let text = non_blank(&state.output.plain_text());
            let phase = state.phase;
            let spinner = state.spinner_phase;

            state.update(AppEvent::Resize(width, height));

            prop_assert_eq!(&state.input, &input);
            prop_assert_eq!(&state.source, &source);
            prop_assert_eq!(non_blank(&state.output.plain_text()), text);
            prop_assert_eq!(state.phase, phase);
            prop_assert_eq!(state.spinner_phase, spinner);
            prop_assert_eq!(state.output.width, width);
            if width > 0 {
                let limit = width as usize;
                prop_assert!(state.output.lines().iter().all(|l| l.width() <= limit));
            }
        }
    }
}
