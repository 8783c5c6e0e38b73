use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Search horizon and per-tier randomization probabilities.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimax depth; also selects the difficulty tier.
    pub depth: usize,
    /// Probability of playing a random column at the easy tier.
    pub easy_blunder_chance: f64,
    /// Probability of playing a random column at the medium tier.
    pub medium_blunder_chance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            easy_blunder_chance: 0.7,
            medium_blunder_chance: 0.3,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows < 4 {
            return Err(ConfigError::Validation("game.rows must be >= 4".into()));
        }
        if self.game.cols < 4 {
            return Err(ConfigError::Validation("game.cols must be >= 4".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.search.easy_blunder_chance) {
            return Err(ConfigError::Validation(
                "search.easy_blunder_chance must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.search.medium_blunder_chance) {
            return Err(ConfigError::Validation(
                "search.medium_blunder_chance must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.cols, 7);
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 6);
        // Other fields should be defaults
        assert_eq!(config.game.rows, 6);
        assert!((config.search.easy_blunder_chance - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.cols, 7);
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_board() {
        let mut config = AppConfig::default();
        config.game.rows = 3;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.cols = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blunder_chance_out_of_range() {
        let mut config = AppConfig::default();
        config.search.easy_blunder_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.medium_blunder_chance = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
rows = 8

[search]
depth = 2
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 8);
        assert_eq!(config.game.cols, 7);
        assert_eq!(config.search.depth, 2);
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
