//! ragchat - a terminal chat client for retrieval-augmented generation
//! backends
//!
//! Binary entry point: parses the command line, resolves settings and runs
//! either the TUI or the headless NDJSON mode.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use ragchat_app::config::{self, Settings};
use ragchat_app::Engine;
use tracing::{error, info};

/// ragchat - chat with your documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "ragchat", version)]
#[command(about = "A terminal chat client for RAG backends", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file and RAGCHAT_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to config.toml (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pause before each chat request, in milliseconds
    #[arg(long, value_name = "MS")]
    thinking_delay_ms: Option<u64>,

    /// Run in headless mode (stdin commands, NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    /// File, then environment, then command line
    fn resolve_settings(&self) -> Settings {
        let mut settings = match self.config_path() {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        };
        config::apply_env_overrides(&mut settings);

        if let Some(url) = &self.base_url {
            settings.server.base_url = url.clone();
        }
        if let Some(ms) = self.thinking_delay_ms {
            settings.behavior.thinking_delay_ms = ms;
        }
        settings
    }
}

/// Point the user at the settings sources when startup cannot continue
fn startup_error(err: ragchat_core::Error) -> color_eyre::Report {
    if err.is_fatal() {
        eyre!(
            "{}\nSet [server] base_url in the config file, {} or --base-url",
            err,
            config::BASE_URL_ENV
        )
    } else {
        err.into()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| eyre!("No config directory found; pass --config PATH"))?;
        let written = config::init_config_file(&path)?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    ragchat_core::logging::init()?;

    let settings = args.resolve_settings();
    info!(
        "Settings: base_url={} thinking_delay_ms={} max_file_size_mb={}",
        settings.server.base_url,
        settings.behavior.thinking_delay_ms,
        settings.upload.max_file_size_mb
    );

    let mut engine = Engine::from_settings(settings).map_err(startup_error)?;

    let result = if args.headless {
        headless::runner::run_headless(&mut engine).await
    } else {
        ragchat_tui::run(&mut engine).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("ragchat exiting");
    Ok(result?)
}
