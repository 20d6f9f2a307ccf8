//! meow: terminal chat client for Google Gemini
//!
//! This library provides:
//! - A one-shot Gemini `generateContent` client
//! - A terminal UI with a prompt box, markdown output viewport and spinner

pub mod config;
pub mod llm;
pub mod tui;

pub use config::Config;
