use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_GOAL, DEFAULT_ROWS, PLAYER_ONE_NAME, PLAYER_TWO_NAME};

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// Minimum run length that wins
    pub goal: usize,
    pub player_one: String,
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            goal: DEFAULT_GOAL,
            player_one: PLAYER_ONE_NAME.to_string(),
            player_two: PLAYER_TWO_NAME.to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// A goal longer than the board is allowed; such a game can only end in a
    /// draw, which is logged but not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be > 0".into()));
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(ConfigError::Validation(format!(
                "board too large: {}x{} cells overflows",
                self.rows, self.columns
            )));
        }
        if self.goal == 0 {
            return Err(ConfigError::Validation("goal must be > 0".into()));
        }
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.player_one == self.player_two {
            return Err(ConfigError::Validation(
                "player names must differ".into(),
            ));
        }

        if self.goal > self.rows.min(self.columns) {
            log::warn!(
                "goal {} exceeds the shorter side of a {}x{} board; some directions can never win",
                self.goal,
                self.rows,
                self.columns
            );
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
