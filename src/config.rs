use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::FirstMover;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who opens each round
    pub first_mover: FirstMover,
    /// Fixed seed for the random source; seeded from the OS when absent
    pub seed: Option<u64>,
}

/// Symbols used by the console renderer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub player: char,
    pub computer: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: '_',
            player: 'X',
            computer: 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log spec in `RUST_LOG` syntax; the environment variable wins if set
    pub level: String,
    /// Write rotated log files here instead of stderr
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            directory: None,
        }
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
    /// does not exist. Runs before logging is up, so the caller reports the
    /// fallback.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [
            ("display.empty", self.display.empty),
            ("display.player", self.display.player),
            ("display.computer", self.display.computer),
        ];
        for (name, symbol) in symbols {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }
        if self.display.empty == self.display.player
            || self.display.empty == self.display.computer
            || self.display.player == self.display.computer
        {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.first_mover, FirstMover::CoinFlip);
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
first_mover = "computer"
seed = 99
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_mover, FirstMover::Computer);
        assert_eq!(config.game.seed, Some(99));
        // Other sections should be defaults
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_first_mover_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nfirst_mover = \"dealer\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_symbols() {
        let mut config = AppConfig::default();
        config.display.computer = 'X';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_whitespace_symbol() {
        let mut config = AppConfig::default();
        config.display.empty = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
empty = "."
player = "R"
computer = "Y"

[logging]
directory = "logs"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.empty, '.');
        assert_eq!(config.display.player, 'R');
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
        // Others are defaults
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nplayer = \"O\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
