//! Configuration for the self-play binary, loadable from TOML.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::{Player, EMPTY_MARKER};
use crate::error::ConfigError;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub players: PlayersConfig,
    /// Initial hash salt for the board; random when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched per move
    pub depth: u32,
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            tt_size_mb: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_name: String,
    pub first_marker: char,
    pub second_name: String,
    pub second_marker: char,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            first_name: "Player1".into(),
            first_marker: 'X',
            second_name: "Player2".into(),
            second_marker: 'O',
        }
    }
}

impl PlayersConfig {
    pub fn build(&self) -> (Player, Player) {
        (
            Player::new(self.first_name.clone(), self.first_marker),
            Player::new(self.second_name.clone(), self.second_marker),
        )
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.tt_size_mb == 0 {
            return Err(ConfigError::Validation(
                "search.tt_size_mb must be >= 1".into(),
            ));
        }
        let p = &self.players;
        if p.first_marker == p.second_marker {
            return Err(ConfigError::Validation(
                "players.first_marker and players.second_marker must differ".into(),
            ));
        }
        if p.first_marker == EMPTY_MARKER || p.second_marker == EMPTY_MARKER {
            return Err(ConfigError::Validation(format!(
                "player markers must not be the empty marker '{}'",
                EMPTY_MARKER
            )));
        }
        Ok(())
    }
}
