//! TUI Controller - owns the state, the renderer and the event queue
//!
//! Each iteration takes one event off the queue, dispatches it through
//! `AppState::update`, runs any resulting command and redraws. Generation
//! requests run as spawned tasks that post `AppEvent::Completed` back into
//! the same queue, so the loop itself never waits on the network.

use anyhow::{bail, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use super::app::{AppState, Command};
use super::events::{AppEvent, EventHandler};
use super::renderer::TuiRenderer;
use crate::llm::PromptGenerator;

/// TUI Controller
pub struct TuiController<B: Backend> {
    state: AppState,
    renderer: TuiRenderer<B>,
    events: EventHandler,
    generator: Arc<dyn PromptGenerator>,
}

impl<B: Backend> TuiController<B> {
    pub fn new(
        state: AppState,
        terminal: Terminal<B>,
        events: EventHandler,
        generator: Arc<dyn PromptGenerator>,
    ) -> Self {
        Self {
            state,
            renderer: TuiRenderer::new(terminal),
            events,
            generator,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &TuiRenderer<B> {
        &self.renderer
    }

    /// Sender feeding the loop's queue
    pub fn sender(&self) -> tokio::sync::mpsc::UnboundedSender<AppEvent> {
        self.events.sender()
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let (cols, rows) = self.renderer.size()?;
        self.state.set_terminal_size(cols, rows);
        self.renderer.render(&self.state)?;

        while !self.state.should_quit {
            self.step().await?;
        }

        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Process exactly one event and redraw
    ///
    /// Fails when terminal input can no longer be read.
    pub async fn step(&mut self) -> Result<()> {
        match self.events.next().await {
            Some(AppEvent::TerminalError(reason)) => {
                bail!("Failed to read terminal input: {}", reason)
            }
            Some(event) => self.dispatch(event),
            None => bail!("Event queue closed"),
        }
        self.renderer.render(&self.state)?;
        Ok(())
    }

    fn dispatch(&mut self, event: AppEvent) {
        if let Some(command) = self.state.update(event) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Generate(prompt) => {
                let generator = Arc::clone(&self.generator);
                let tx = self.events.sender();
                tracing::debug!(provider = generator.name(), "Spawning generation task");
                tokio::spawn(async move {
                    let result = generator.generate(&prompt).await;
                    if tx.send(AppEvent::Completed(result)).is_err() {
                        tracing::debug!("Loop exited before generation finished");
                    }
                });
            }
        }
    }
}

/// Set up the terminal, run the loop, and restore the terminal afterwards
pub async fn run_tui(state: AppState, generator: Arc<dyn PromptGenerator>) -> Result<()> {
    let tick_rate = std::time::Duration::from_millis(state.config.tick_rate_ms.max(1));

    install_panic_hook();
    let terminal = setup_terminal().context("Failed to initialize terminal")?;
    let events = EventHandler::with_terminal(tick_rate);

    let mut controller = TuiController::new(state, terminal, events, generator);
    let result = controller.run().await;

    let restored = restore_terminal(controller.renderer.terminal_mut());
    result?;
    restored.context("Failed to restore terminal")
}

/// Restore the terminal before the default panic output is printed
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Set up the terminal for TUI rendering
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
