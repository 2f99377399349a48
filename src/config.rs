use std::path::{Path, PathBuf};

use config::{Config, File};
use thiserror::Error;

/// Errors raised while resolving the runtime configuration
///
/// All variants are fatal for the invocation; the process exits non-zero
/// without constructing the application.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The path given with `--config` is not present on disk
    #[error("config file '{}' does not exist", .path.display())]
    ConfigFileNotFound { path: PathBuf },

    /// The config file exists but could not be read or parsed
    #[error("config file '{}' could not be loaded: {source}", .path.display())]
    ConfigFileInvalid {
        path: PathBuf,
        source: config::ConfigError,
    },
}

/// Validated record of user-supplied startup options.
///
/// Constructed exactly once per invocation by [`crate::cli::Cli::resolve`]
/// and moved into the application unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Path passed with `--config`, kept verbatim after the existence check
    pub config_file: Option<PathBuf>,
    /// AWS profile name, not validated against any credential store
    pub profile: Option<String>,
    /// AWS region name, not validated against any region list
    pub region: Option<String>,
    /// Whether debug logging is enabled
    pub debug: bool,
}

/// Optional defaults read from the file given with `--config`.
///
/// Only the keys listed here are consulted; explicit command-line flags
/// always win over file values.
#[derive(Debug, Default)]
pub struct FileSettings {
    pub profile: Option<String>,
    pub region: Option<String>,
    pub debug: bool,
}

impl FileSettings {
    /// Loads the settings file, detecting the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|source| ConfigError::ConfigFileInvalid {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            profile: settings.get_string("profile").ok(),
            region: settings.get_string("region").ok(),
            debug: settings.get_bool("debug").unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "profile: dev\n").unwrap();

        let settings = FileSettings::load(&path).unwrap();
        assert_eq!(settings.profile.as_deref(), Some("dev"));
        assert_eq!(settings.region, None);
        assert!(!settings.debug);
    }

    #[test]
    fn every_supported_key_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "profile: dev\nregion: eu-west-1\ndebug: true\n").unwrap();

        let settings = FileSettings::load(&path).unwrap();
        assert_eq!(settings.profile.as_deref(), Some("dev"));
        assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
        assert!(settings.debug);
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSettings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileInvalid { .. }));
    }

    #[test]
    fn not_found_message_names_the_path() {
        let err = ConfigError::ConfigFileNotFound {
            path: PathBuf::from("nonexistent.yaml"),
        };
        let message = err.to_string();
        assert!(message.contains("nonexistent.yaml"));
        assert!(message.contains("does not exist"));
    }
}
