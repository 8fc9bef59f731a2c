//! Application configuration loaded from `config.toml`.
//!
//! Every setting has a default, so a missing file is not an error; a file that
//! exists but cannot be read or parsed is.

/// Deterministic seed data generator
pub mod generator;

/// Seed fixture loading and snapshot construction
pub mod seed;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "SCHOOLBUDDY_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the school snapshot comes from
    pub seed: SeedSettings,
    /// How much the views show at once
    pub display: DisplaySettings,
}

/// Seed data source settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedSettings {
    /// TOML fixture file; when unset the generator is used
    pub fixtures: Option<PathBuf>,
    /// RNG seed for the generator
    pub generator_seed: u64,
    /// Number of students the generator creates
    pub student_count: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            fixtures: None,
            generator_seed: 42,
            student_count: 50,
        }
    }
}

/// Page sizes for list views.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum records listed by the attendance and performance views
    pub page_size: usize,
    /// Number of students shown on the leaderboard
    pub leaderboard_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            leaderboard_size: 10,
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Loads the application configuration.
///
/// Reads the file named by `SCHOOLBUDDY_CONFIG`, or `./config.toml`. A missing
/// file yields the defaults.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if !path.exists() {
        info!(
            "No configuration file at {}, using defaults.",
            path.display()
        );
        return Ok(AppConfig::default());
    }

    let config = load_config(&path)?;
    info!("Loaded configuration from {}.", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [seed]
            fixtures = "data/seed.toml"
            generator_seed = 7
            student_count = 12

            [display]
            page_size = 15
            leaderboard_size = 5
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.seed.fixtures, Some(PathBuf::from("data/seed.toml")));
        assert_eq!(config.seed.generator_seed, 7);
        assert_eq!(config.seed.student_count, 12);
        assert_eq!(config.display.page_size, 15);
        assert_eq!(config.display.leaderboard_size, 5);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.seed.student_count, 50);
        assert_eq!(config.display.page_size, 20);
        assert!(config.seed.fixtures.is_none());
    }

    #[test]
    fn test_parse_partial_section_keeps_other_defaults() {
        let config = parse_config("[display]\npage_size = 5\n").unwrap();
        assert_eq!(config.display.page_size, 5);
        assert_eq!(config.display.leaderboard_size, 10);
        assert_eq!(config.seed, SeedSettings::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[display]\npage_size = \"many\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
