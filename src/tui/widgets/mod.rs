//! TUI Widgets - Reusable UI components

mod footer;
mod header;
mod input;
pub mod markdown;
mod viewport;

pub use footer::Footer;
pub use header::Header;
pub use input::InputWidget;
pub use markdown::{MarkdownRenderer, RenderError};
pub use viewport::OutputView;
