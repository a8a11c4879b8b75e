use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a placement is refused. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("{pos}={marker} is not empty")]
    Occupied { pos: Pos, marker: char },

    #[error("cannot place an empty stone")]
    NotAPlayer,
}

/// Player markers that would make the grid ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("both players use marker '{0}'")]
    Duplicate(char),

    #[error("marker '{0}' is reserved for empty cells")]
    Reserved(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
