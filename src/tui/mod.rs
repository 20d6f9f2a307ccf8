//! Terminal chat UI
//!
//! `app` holds the state machine, `controller` drives the event loop,
//! `renderer` and `widgets` turn state into frames.

pub mod app;
pub mod controller;
pub mod events;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use app::{AppState, Command, Focus, OutputSource, Phase};
pub use controller::{run_tui, TuiController};
pub use events::{AppEvent, EventHandler};
pub use renderer::TuiRenderer;
pub use theme::Theme;
