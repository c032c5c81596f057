//! simon - Simon Says in the terminal
//!
//! Run with: cargo run --bin simon
//!
//! Environment:
//! - `SIMON_CONFIG`: path to a TOML file with game settings
//! - `SIMON_LOG`: path to a log file (logging is off without it)

mod app;
mod ui;

use std::{fs::File, path::PathBuf, sync::Mutex};

use app::Simon;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use simon_says::config::GameConfig;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = match std::env::var_os("SIMON_CONFIG").map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    Simon::new().config(config).run()
}

/// Logs go to a file; anything written to stdout would tear the TUI.
fn init_logging() -> EyreResult<()> {
    let Some(path) = std::env::var_os("SIMON_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).wrap_err("failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|err| eyre!(err))
}
