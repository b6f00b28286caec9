use crate::constants::{DEFAULT_ALLOWED_COMPETITION_IDS, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the fixtures data provider. Should include https:// prefix.
    pub api_domain: String,
    /// Provider API key sent on every request.
    pub api_key: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Curated competition ids that are always eligible regardless of name.
    #[serde(default = "default_allowed_competition_ids")]
    pub allowed_competition_ids: Vec<u32>,
    /// Optional IANA timezone name forwarded to the fixtures endpoint so
    /// kickoff times come back in the viewer's zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Optional cost-control window: when set, competitions whose resolved
    /// season is not in this list are skipped before fetching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_seasons: Option<Vec<i32>>,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_allowed_competition_ids() -> Vec<u32> {
    DEFAULT_ALLOWED_COMPETITION_IDS.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            api_key: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            allowed_competition_ids: default_allowed_competition_ids(),
            timezone: None,
            supported_seasons: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `MATCHBOARD_API_DOMAIN` - Override API domain
    /// - `MATCHBOARD_API_KEY` - Override API key
    /// - `MATCHBOARD_LOG_FILE` - Override log file path
    /// - `MATCHBOARD_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `MATCHBOARD_TIMEZONE` - Override forwarded IANA timezone
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Loads configuration from an explicit path. Used by `load()` and tests.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            // No config file yet; the environment must carry the essentials
            Config::default()
        };

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            config.api_key = api_key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        if let Ok(timezone) = std::env::var(env_vars::TIMEZONE) {
            config.timezone = Some(timezone);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.api_key, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves current configuration to an explicit path.
    /// Creates the parent directory if needed and ensures the api_domain
    /// carries an https:// prefix.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        let path = Path::new(config_path);
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut to_save = self.clone();
        if !to_save.api_domain.is_empty()
            && !to_save.api_domain.starts_with("http://")
            && !to_save.api_domain.starts_with("https://")
        {
            to_save.api_domain = format!("https://{}", to_save.api_domain);
        }

        let content = toml::to_string_pretty(&to_save)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("Allowed Competition IDs:");
            println!("{:?}", config.allowed_competition_ids);
            if let Some(tz) = &config.timezone {
                println!("────────────────────────────────────");
                println!("Timezone:");
                println!("{tz}");
            }
            if let Some(seasons) = &config.supported_seasons {
                println!("────────────────────────────────────");
                println!("Supported Seasons:");
                println!("{seasons:?}");
            }
            if let Some(log_path) = &config.log_file_path {
                println!("────────────────────────────────────");
                println!("Log File:");
                println!("{log_path}");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("\nSet one up with --set-api-domain and --set-api-key.");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // Safety: test-only, serialized via serial_test
        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::TIMEZONE);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_save_and_load_round_trip() {
        clear_env();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "https://v3.football.api-sports.io".to_string(),
            api_key: "secret".to_string(),
            allowed_competition_ids: vec![44, 82],
            timezone: Some("Europe/London".to_string()),
            supported_seasons: Some(vec![2024, 2025]),
            ..Config::default()
        };
        config.save_to_path(&path).await.expect("save");

        let loaded = Config::load_from_path(&path).await.expect("load");
        assert_eq!(loaded.api_domain, "https://v3.football.api-sports.io");
        assert_eq!(loaded.api_key, "secret");
        assert_eq!(loaded.allowed_competition_ids, vec![44, 82]);
        assert_eq!(loaded.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(loaded.supported_seasons, Some(vec![2024, 2025]));
        assert_eq!(loaded.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        clear_env();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "https://file.example.com".to_string(),
            api_key: "file-key".to_string(),
            ..Config::default()
        };
        config.save_to_path(&path).await.expect("save");

        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://env.example.com");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }
        let loaded = Config::load_from_path(&path).await.expect("load");
        clear_env();

        assert_eq!(loaded.api_domain, "https://env.example.com");
        assert_eq!(loaded.api_key, "file-key");
        assert_eq!(loaded.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_without_env_is_config_error() {
        clear_env();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.toml").to_string_lossy().to_string();

        let result = Config::load_from_path(&path).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_save_adds_https_prefix() {
        clear_env();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "v3.football.api-sports.io".to_string(),
            api_key: "secret".to_string(),
            ..Config::default()
        };
        config.save_to_path(&path).await.expect("save");

        let loaded = Config::load_from_path(&path).await.expect("load");
        assert_eq!(loaded.api_domain, "https://v3.football.api-sports.io");
    }

    #[tokio::test]
    #[serial]
    async fn test_default_allow_list_kept_when_absent_from_file() {
        clear_env();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml").to_string_lossy().to_string();
        tokio::fs::write(
            &path,
            "api_domain = \"https://v3.football.api-sports.io\"\napi_key = \"k\"\n",
        )
        .await
        .expect("write");

        let loaded = Config::load_from_path(&path).await.expect("load");
        assert_eq!(
            loaded.allowed_competition_ids,
            DEFAULT_ALLOWED_COMPETITION_IDS.to_vec()
        );
    }
}
