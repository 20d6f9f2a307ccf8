use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meow_cli::config::Config;
use meow_cli::llm::{GeminiProvider, PromptGenerator};
use meow_cli::tui::{self, AppState};

#[derive(Parser)]
#[command(name = "meow")]
#[command(author, version, about = "Meow - chat with Gemini from your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Gemini model to use (e.g., gemini-2.5-flash)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Path to config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Wrap width for rendered markdown
    #[arg(long, global = true)]
    wrap: Option<usize>,

    /// Write logs to this file while the TUI is running
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single prompt and print the raw answer
    Ask {
        /// Prompt text
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(model) = cli.model {
        config.gemini.model = model;
    }
    if let Some(wrap) = cli.wrap {
        config.ui.word_wrap = wrap;
    }

    match cli.command {
        Some(Commands::Ask { prompt }) => {
            init_logging(cli.verbose, BoxMakeWriter::new(std::io::stderr));
            let provider = GeminiProvider::new(config.gemini);
            tracing::info!("Asking {} (one-shot)", provider.model());
            let answer = provider.generate(&prompt).await?;
            println!("{}", answer);
        }
        None => {
            // The TUI owns the terminal, so logs go to a file
            let log_path = cli.log_file.unwrap_or_else(Config::default_log_path);
            init_logging(cli.verbose, file_writer(&log_path));
            tracing::info!("Starting TUI, model: {}", config.gemini.model);

            let generator: Arc<dyn PromptGenerator> = Arc::new(GeminiProvider::new(config.gemini));
            tui::run_tui(AppState::new(config.ui), generator).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, writer: BoxMakeWriter) {
    let filter = if verbose {
        "meow_cli=debug"
    } else {
        "meow_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

/// Append-mode log file writer; logging is dropped if the file can't be opened
fn file_writer(path: &Path) -> BoxMakeWriter {
    match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            BoxMakeWriter::new(std::io::sink)
        }
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
