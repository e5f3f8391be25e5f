use crate::error::{DeliciousError, Result};
use crate::fetch::DEFAULT_ENDPOINT;
use crate::render::DEFAULT_TEMPLATE;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured username
pub const USERNAME_ENV: &str = "DELICIOUS_USERNAME";
/// Environment variable overriding the configured password
pub const PASSWORD_ENV: &str = "DELICIOUS_PASSWORD";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Delicious account name
    #[serde(default)]
    pub username: Option<String>,

    /// Delicious account password
    #[serde(default)]
    pub password: Option<String>,

    /// Inline template, takes precedence over `template_path`
    #[serde(default)]
    pub template: Option<String>,

    /// Template file
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Bookmark export endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Custom user-agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            template: None,
            template_path: None,
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    concat!("deliciousrs/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/deliciousrs/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {:?}: {}. Using default configuration",
                        config_path, e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Apply `DELICIOUS_USERNAME` / `DELICIOUS_PASSWORD` from the environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(USERNAME_ENV).ok(),
            std::env::var(PASSWORD_ENV).ok(),
        )
    }

    fn with_overrides(mut self, username: Option<String>, password: Option<String>) -> Self {
        if username.is_some() {
            self.username = username;
        }
        if password.is_some() {
            self.password = password;
        }
        self
    }

    /// The template to render with: inline, then file, then the default
    pub fn resolve_template(&self) -> Result<String> {
        if let Some(template) = &self.template {
            return Ok(template.clone());
        }
        if let Some(path) = &self.template_path {
            return fs::read_to_string(path).map_err(|e| {
                DeliciousError::Config(format!("cannot read template {:?}: {}", path, e))
            });
        }
        Ok(DEFAULT_TEMPLATE.to_string())
    }
}
