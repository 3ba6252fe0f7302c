use super::Result;
use crate::api::client::DataGovClient;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable consulted before the config file's key.
pub const API_KEY_ENV: &str = "DATA_GOV_API_KEY";
/// Optional override for the service authority.
pub const BASE_URL_ENV: &str = "DATA_GOV_BASE_URL";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::DirNotFound)?;

        let app_config_dir = config_dir.join("usda-client");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Load the default config file with environment variables applied
    /// on top of it.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::load(None)?;
        config.overlay(
            env::var(API_KEY_ENV).ok(),
            env::var(BASE_URL_ENV).ok(),
        );
        Ok(config)
    }

    /// Apply overrides on top of file values. Empty strings are ignored.
    pub fn overlay(&mut self, api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = api_key {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Some(url) = base_url {
            if !url.is_empty() {
                self.base_url = Some(url);
            }
        }
    }

    /// Build an API client for `uri_part` from this configuration.
    pub fn build_client(&self, uri_part: &str) -> crate::Result<DataGovClient> {
        let key = self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;
        match self.base_url.as_deref() {
            Some(base_url) => DataGovClient::with_base_url(base_url, uri_part, key),
            None => DataGovClient::new(uri_part, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::UriAction;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_key: Some("API_KAY".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded_config.api_key, config.api_key);
        assert_eq!(loaded_config.base_url, config.base_url);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")));
        assert!(config.is_ok());

        let config = config.expect("Failed to load default config");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "api_key = [not toml").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overlay_precedence() {
        let mut config = Config {
            api_key: Some("from_file".to_string()),
            base_url: None,
        };

        config.overlay(Some("from_env".to_string()), None);
        assert_eq!(config.api_key.as_deref(), Some("from_env"));

        // Empty values never clobber file values
        config.overlay(Some(String::new()), Some(String::new()));
        assert_eq!(config.api_key.as_deref(), Some("from_env"));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_build_client_requires_key() {
        let config = Config::default();
        assert!(config.build_client("ndb").is_err());
    }

    #[test]
    fn test_build_client_uses_base_url_override() {
        let config = Config {
            api_key: Some("API_KAY".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
        };
        let client = config.build_client("ndb").expect("client creation failed");
        assert_eq!(
            client.build_uri(UriAction::List),
            "http://localhost:8080/ndb/list"
        );
    }
}
