//! Event handling for the TUI
//!
//! Terminal input is read on a dedicated thread and forwarded into the same
//! unbounded channel that background generation tasks report into, so the
//! controller has a single queue to drain.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::llm::LlmError;

/// Messages dispatched by the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize (cols, rows)
    Resize(u16, u16),
    /// Tick for animations
    Tick,
    /// A generation request finished
    Completed(Result<String, LlmError>),
    /// Reading terminal input failed; the reader has stopped
    TerminalError(String),
}

/// Event handler owning the loop's queue
pub struct EventHandler {
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a handler with no terminal reader attached
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Create a handler and start forwarding terminal events
    pub fn with_terminal(tick_rate: Duration) -> Self {
        let handler = Self::new();
        handler.spawn_terminal_reader(tick_rate);
        handler
    }

    /// Sender for background tasks to report into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    /// Wait for the next event
    ///
    /// The handler holds a sender of its own, so this keeps waiting while the
    /// queue is empty. `None` only comes back if the channel itself is closed.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    fn spawn_terminal_reader(&self, tick_rate: Duration) {
        let tx = self.tx.clone();
        std::thread::spawn(move || forward_events(&tx, || poll_terminal(tick_rate)));
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward polled events until the loop goes away or polling fails. A
/// failure is reported as `AppEvent::TerminalError` so the loop can exit.
fn forward_events<F>(tx: &mpsc::UnboundedSender<AppEvent>, mut poll: F)
where
    F: FnMut() -> std::io::Result<Option<AppEvent>>,
{
    loop {
        let event = match poll() {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                tracing::error!("Terminal event read failed: {}", e);
                let _ = tx.send(AppEvent::TerminalError(e.to_string()));
                return;
            }
        };
        if tx.send(event).is_err() {
            // Loop has shut down
            return;
        }
    }
}

/// Poll for the next terminal event, yielding a tick when the rate elapses
fn poll_terminal(tick_rate: Duration) -> std::io::Result<Option<AppEvent>> {
    if !event::poll(tick_rate)? {
        return Ok(Some(AppEvent::Tick));
    }
    match event::read()? {
        // Ignore key release/repeat reports on terminals that send them
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
        CrosstermEvent::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
        _ => Ok(None),
    }
}
