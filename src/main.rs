//! Tap Stopwatch - a full-screen terminal stopwatch
//!
//! This is the main entry point for the tap-stopwatch application.

use std::{fs::File, sync::{Arc, Mutex}};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tap_stopwatch::{
    config::Config,
    state::AppState,
    tasks::refresh_task,
    ui,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_tracing(&config)?;

    info!("Starting tap-stopwatch v1.0.0");
    info!("Configuration: tick={}ms, fullscreen={}",
          config.tick().as_millis(), !config.windowed);

    // Create application state
    let state = Arc::new(AppState::new(!config.windowed));

    // Start the display refresh background task
    let refresh = tokio::spawn(refresh_task(Arc::clone(&state), config.tick()));

    let result = ui::run(Arc::clone(&state)).await;

    refresh.abort();
    info!("Stopwatch shutdown complete");
    result
}

/// The terminal belongs to the display, so logs only go to a file if asked
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tap_stopwatch={}", config.log_level())));

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}
