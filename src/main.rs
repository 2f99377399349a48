//! AWSome - Terminal User Interface for AWS
//!
//! This is the main entry point for the application.
//! It resolves the command-line configuration, initializes error handling
//! and the terminal interface, and runs the application event loop.

use clap::Parser;

use crate::app::App;
use crate::cli::Cli;

/// Application state and lifecycle management
pub mod app;
/// Command-line argument surface and resolution
pub mod cli;
/// Runtime configuration record and config-file overlay
pub mod config;
/// Event management system for handling user input and tick events
pub mod event_managment;
/// Debug logging setup
pub mod logging;
/// UI rendering and layout modules
pub mod ui;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Initialize error handling with detailed backtraces
    color_eyre::install()?;

    // Resolve the configuration before touching the terminal so validation
    // errors are printed to a normal screen
    let config = Cli::parse().resolve()?;
    logging::init(&config)?;

    // Initialize the terminal UI with ratatui
    let terminal = ratatui::init();

    // Create and run the application with the resolved configuration
    let result = App::new(config).run(terminal).await;

    // Restore terminal to original state before exiting
    ratatui::restore();

    // Return the final result, which includes any errors that occurred
    result
}
