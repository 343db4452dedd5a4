//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Display preferences for the terminal host.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct HostConfig {
    /// Name shown for the player using X.
    player_x_name: String,

    /// Name shown for the player using O.
    player_o_name: String,

    /// Glyph drawn in empty cells.
    empty_glyph: char,

    /// Whether to ask "Play again?" after a finished game.
    offer_replay: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            player_x_name: "Player X".to_string(),
            player_o_name: "Player O".to_string(),
            empty_glyph: '.',
            offer_replay: true,
        }
    }
}

impl HostConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = %config.player_x_name,
            player_o = %config.player_o_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the display name for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
