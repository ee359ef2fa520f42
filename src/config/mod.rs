//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculate::DuoOptions;
use crate::models::Game;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Duo finder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuoConfig {
    /// Game used when a command doesn't name one
    #[serde(default = "default_game")]
    pub default_game: Game,

    /// Maximum matches returned (0 = unlimited)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Only match players inside the allowed rank window
    #[serde(default = "default_strict_range")]
    pub strict_range: bool,
}

fn default_game() -> Game {
    Game::Valorant
}

fn default_max_results() -> usize {
    20
}

fn default_strict_range() -> bool {
    true
}

impl Default for DuoConfig {
    fn default() -> Self {
        Self {
            default_game: default_game(),
            max_results: default_max_results(),
            strict_range: default_strict_range(),
        }
    }
}

impl DuoConfig {
    pub fn options(&self) -> DuoOptions {
        DuoOptions {
            max_results: self.max_results,
            strict_range: self.strict_range,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub duo: DuoConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            duo: DuoConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides, then validate the result.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.log_level))
        {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.duo.default_game, Game::Valorant);
        assert_eq!(config.duo.max_results, 20);
        assert!(config.duo.strict_range);
    }

    #[test]
    fn test_duo_options() {
        let duo = DuoConfig {
            default_game: Game::League,
            max_results: 5,
            strict_range: false,
        };
        assert_eq!(
            duo.options(),
            DuoOptions {
                max_results: 5,
                strict_range: false
            }
        );
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "loud".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_overrides_applied() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("/tmp/ranks")), Some("debug".to_string()))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/ranks"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_overrides_revalidated() {
        let result = AppConfig::default().with_overrides(None, Some("loud".to_string()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_partial_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [duo]
            default_game = "league"
            "#,
        )
        .unwrap();

        assert_eq!(config.duo.default_game, Game::League);
        assert_eq!(config.duo.max_results, 20);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/ranks\"\nlog_level = \"debug\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ranks"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_unknown_game_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[duo]\ndefault_game = \"chess\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.duo.default_game, parsed.duo.default_game);
    }
}
