//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer answers, in milliseconds. Zero answers inline.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the opponent's random fallback. Unset draws from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    500
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(computer_delay_ms: u64, seed: Option<u64>) -> Self {
        Self {
            computer_delay_ms,
            seed,
        }
    }

    /// Configuration for headless play: no delay.
    pub fn headless(seed: Option<u64>) -> Self {
        Self::new(0, seed)
    }

    /// The computer's reply delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            computer_delay_ms = config.computer_delay_ms,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, computer_delay_ms: Option<u64>, seed: Option<u64>) -> Self {
        if let Some(delay) = computer_delay_ms {
            debug!(delay, "Overriding computer delay");
            self.computer_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_computer_delay_ms(), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(*config.seed(), None);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_file_reads_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = 250\nseed = 17").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::new(250, Some(17)));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::new(500, Some(1)).with_overrides(Some(0), None);
        assert_eq!(config, GameConfig::new(0, Some(1)));

        let config = GameConfig::default().with_overrides(None, Some(8));
        assert_eq!(config, GameConfig::new(500, Some(8)));
    }
}
