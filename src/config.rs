use crate::constants::{OUTPUT_FILE_NAME, SLEEPER_PLAYERS_URL};
use crate::error::AppError;
use std::path::PathBuf;

/// Runtime settings for a single export run.
///
/// There is no config file or environment override: the binary always runs
/// with [`Config::default`]. The fields exist so the pipeline can be pointed
/// at a mock server and a temporary output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint returning the player roster as a JSON object
    pub players_url: String,
    /// Destination of the player directory JSON
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            players_url: SLEEPER_PLAYERS_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

impl Config {
    pub fn new(players_url: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            players_url: players_url.into(),
            output_path: output_path.into(),
        }
    }

    /// Validates the configuration settings
    ///
    /// # Validation Rules
    /// - Players URL cannot be empty
    /// - Players URL must use http:// or https://
    /// - Output path cannot be empty
    pub fn validate(&self) -> Result<(), AppError> {
        if self.players_url.trim().is_empty() {
            return Err(AppError::config_error("Players URL cannot be empty"));
        }

        if !self.players_url.starts_with("http://") && !self.players_url.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "Players URL must start with http:// or https://: {}",
                self.players_url
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::config_error("Output path cannot be empty"));
        }

        Ok(())
    }
}
