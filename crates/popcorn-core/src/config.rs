use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use popcorn_api::omdb::{OmdbClient, Plot};

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variable that overrides `catalog.api_key`.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub rating: RatingConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub plot: Plot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    pub max_rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub mode: ThemeMode,
}

/// Requested colour mode; `System` follows the desktop setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

impl AppConfig {
    /// Load config: user file (if exists) merged key-by-key over built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(user_path: &Path) -> Result<Self, ConfigError> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if user_path.exists() {
            let user_str = std::fs::read_to_string(user_path)?;
            let user: toml::Table =
                toml::from_str(&user_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
            merge_tables(&mut merged, user);
        }

        let config = toml::Value::Table(merged)
            .try_into::<AppConfig>()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.rating.max_rating == 0 {
            return Err(ConfigError::Parse(
                "rating.max_rating must be at least 1".into(),
            ));
        }
        Ok(config)
    }

    /// Resolve the API key: environment first, then the config file.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_env(&self, env_value: Option<String>) -> Result<String, ConfigError> {
        env_value
            .into_iter()
            .chain(self.catalog.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(Self::config_path().display().to_string()))
    }

    /// Build the catalog client described by `[catalog]`.
    pub fn catalog_client(&self) -> Result<OmdbClient, ConfigError> {
        let client = OmdbClient::new(self.api_key()?)
            .with_base_url(self.catalog.base_url.clone())
            .with_plot(self.catalog.plot);

        if self.catalog.timeout_secs == 0 {
            return Ok(client);
        }
        client
            .with_timeout(Duration::from_secs(self.catalog.timeout_secs))
            .map_err(|e| ConfigError::Client(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "popcorn")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge_tables(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.catalog.plot, Plot::Short);
        assert!(config.catalog.api_key.is_none());
        assert_eq!(config.rating.max_rating, 10);
        assert_eq!(config.appearance.mode, ThemeMode::System);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.rating.max_rating, config.rating.max_rating);
        assert_eq!(deserialized.catalog.base_url, config.catalog.base_url);
    }

    #[test]
    fn test_user_file_overrides_single_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[rating]\nmax_rating = 5\n\n[catalog]\napi_key = \"abc123\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.rating.max_rating, 5);
        assert_eq!(config.catalog.api_key.as_deref(), Some("abc123"));
        // Untouched keys keep their defaults.
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.appearance.mode, ThemeMode::System);
    }

    #[test]
    fn test_missing_user_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.rating.max_rating, 10);
    }

    #[test]
    fn test_malformed_user_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rating\nmax_rating = ").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_max_rating_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rating]\nmax_rating = 0\n").unwrap();
        match AppConfig::load_from(&path) {
            Err(ConfigError::Parse(msg)) => assert!(msg.contains("max_rating")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let mut config = AppConfig::default();
        config.catalog.api_key = Some("from-file".into());
        let key = config.api_key_with_env(Some("from-env".into())).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_blank_env_key_falls_back_to_file() {
        let mut config = AppConfig::default();
        config.catalog.api_key = Some("from-file".into());
        let key = config.api_key_with_env(Some("   ".into())).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_missing_key_is_error() {
        let config = AppConfig::default();
        assert!(matches!(
            config.api_key_with_env(None),
            Err(ConfigError::MissingApiKey(_))
        ));
    }
}
