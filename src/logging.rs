//! Debug logging setup.
//!
//! The terminal is owned by ratatui while the application runs, so debug
//! traces go to a file in the working directory instead of stderr.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;

use crate::config::Configuration;

/// Name of the log file written when debug mode is enabled.
pub const DEBUG_LOG_FILE: &str = "awsome-debug.log";

/// Installs a file-backed tracing subscriber when debug mode is on.
///
/// Without `--debug` no subscriber is installed and the tracing macros
/// throughout the application are no-ops.
pub fn init(config: &Configuration) -> color_eyre::Result<()> {
    if !config.debug {
        return Ok(());
    }

    let log_file = File::create(DEBUG_LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    tracing::debug!(?config, "debug logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_debug_no_subscriber_is_installed() {
        // Must stay a no-op: installing a global subscriber here would
        // poison every other test in the binary.
        init(&Configuration::default()).unwrap();
        init(&Configuration::default()).unwrap();
    }
}
