use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{GameKind, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game highlighted on the start menu
    pub default_kind: GameKind,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub a: PlayerStyle,
    pub b: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            a: PlayerStyle {
                name: Player::A.label().to_string(),
                color: "red".to_string(),
            },
            b: PlayerStyle {
                name: Player::B.label().to_string(),
                color: "blue".to_string(),
            },
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }
}

/// Display name and piece colour for one player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStyle {
    pub name: String,
    /// Any colour name ratatui understands ("red", "light-blue", "#ff8800", ...)
    pub color: String,
}

impl PlayerStyle {
    pub fn color(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.color)
            .map_err(|_| ConfigError::Validation(format!("unknown colour '{}'", self.color)))
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, style) in [("a", &self.players.a), ("b", &self.players.b)] {
            if style.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            style.color()?;
        }
        if self.players.a.name == self.players.b.name {
            return Err(ConfigError::Validation(
                "players.a.name and players.b.name must differ".into(),
            ));
        }
        if self.players.a.color()? == self.players.b.color()? {
            return Err(ConfigError::Validation(
                "players.a.color and players.b.color must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
