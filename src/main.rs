//! Tic-Tac-Toe GUI
//!
//! Two players take turns on one machine.

use std::path::PathBuf;

use clap::Parser;
use tictactoe::config::DEFAULT_CONFIG_PATH;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AppConfig, AppError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player Tic-Tac-Toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML config file. Defaults are used if it does not exist.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    if cli.write_default_config {
        return AppConfig::write_default(&cli.config);
    }

    let config = AppConfig::load(&cli.config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([200.0, 240.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    info!(title = %config.window.title, "Starting");

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )?;

    Ok(())
}
