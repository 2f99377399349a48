use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, Configuration, FileSettings};

/// Command-line surface of the application.
///
/// Every option is optional; `resolve` applies the defaults and the
/// config-file overlay to produce the final [`Configuration`].
#[derive(Debug, Parser)]
#[command(
    name = "awsome",
    about = "AWSome - Terminal User Interface for AWS",
    version
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// AWS profile to use
    #[arg(long, short)]
    pub profile: Option<String>,

    /// AWS region
    #[arg(long, short)]
    pub region: Option<String>,

    /// Enable debug mode
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolves the parsed arguments into a validated [`Configuration`].
    ///
    /// The config path is checked for existence exactly once, here. When the
    /// file is present it may fill in fields the flags left absent; an
    /// explicit flag always wins over a file value.
    pub fn resolve(self) -> Result<Configuration, ConfigError> {
        let file_settings = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::ConfigFileNotFound { path: path.clone() });
                }
                FileSettings::load(path)?
            }
            None => FileSettings::default(),
        };

        let config = Configuration {
            config_file: self.config,
            profile: self.profile.or(file_settings.profile),
            region: self.region.or(file_settings.region),
            debug: self.debug || file_settings.debug,
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}
