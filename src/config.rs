use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::view::pagination::PaginationMode;

pub const PAGE_SIZE_CHOICES: [u32; 4] = [10, 20, 50, 100];
const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {name}: {value:?}")]
    Env { name: &'static str, value: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub page_size: u32,
    pub pagination: PaginationMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
            request_timeout_secs: 30,
            page_size: PAGE_SIZE_CHOICES[0],
            pagination: PaginationMode::Server,
        }
    }
}

impl AppConfig {
    /// Defaults, then `config.json` in the platform config dir, then `OBRAS_*`
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_config_path();
        Self::load_from(path.as_deref(), |name| std::env::var(name).ok())
    }

    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => AppConfig::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(url) = env("OBRAS_API_URL") {
            self.api_base_url = url;
        }
        if let Some(value) = env("OBRAS_PAGE_SIZE") {
            self.page_size = value.trim().parse().map_err(|_| ConfigError::Env {
                name: "OBRAS_PAGE_SIZE",
                value: value.clone(),
            })?;
        }
        if let Some(value) = env("OBRAS_TIMEOUT_SECS") {
            self.request_timeout_secs = value.trim().parse().map_err(|_| ConfigError::Env {
                name: "OBRAS_TIMEOUT_SECS",
                value: value.clone(),
            })?;
        }
        if let Some(value) = env("OBRAS_PAGINATION") {
            self.pagination = match value.trim().to_ascii_lowercase().as_str() {
                "server" => PaginationMode::Server,
                "client" => PaginationMode::Client,
                _ => {
                    return Err(ConfigError::Env {
                        name: "OBRAS_PAGINATION",
                        value,
                    })
                }
            };
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("br", "obras", "backoffice")
        .map(|dirs| dirs.config_dir().join("config.json"))
}
