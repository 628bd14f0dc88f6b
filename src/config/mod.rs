// ABOUTME: Configuration management for visa-intake
// Layered TOML files under /etc, the home directory and the working directory, then env overrides

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "VISA_INTAKE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// How the checkout page is opened
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the consultation API (default: http://localhost:8000)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BrowserConfig {
    /// Launcher command, e.g. "firefox". Falls back to `open`/`xdg-open`.
    #[serde(default)]
    pub command: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl AppConfig {
    /// Load configuration from default locations, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_paths(&Self::get_config_paths())?;
        config.apply_env_overrides(std::env::var(API_URL_ENV).ok())?;
        Ok(config)
    }

    /// Merge each existing file in `paths` over the defaults, in order
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            if path.exists() {
                let file_config = Self::read_file(path)?;
                debug!("Loaded config from {}", path.display());
                config.merge(file_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<PartialConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/visa-intake/config.toml")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".visa-intake").join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".visa-intake").join("config.toml"));
        }

        paths
    }

    /// Apply the API URL from the environment, if set and non-empty
    pub fn apply_env_overrides(&mut self, api_url: Option<String>) -> Result<()> {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            info!("Using API base URL from {}", API_URL_ENV);
            self.set_api_url(url)?;
        }
        Ok(())
    }

    /// Replace the API base URL after validating it
    pub fn set_api_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        validate_base_url(&url)?;
        self.api.base_url = url;
        Ok(())
    }

    fn merge(&mut self, other: PartialConfig) {
        if let Some(api) = other.api {
            if let Some(base_url) = api.base_url {
                self.api.base_url = base_url;
            }
            if api.request_timeout_secs.is_some() {
                self.api.request_timeout_secs = api.request_timeout_secs;
            }
        }
        if let Some(browser) = other.browser {
            if browser.command.is_some() {
                self.browser.command = browser.command;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        validate_base_url(&self.api.base_url)?;
        if self.api.request_timeout_secs == Some(0) {
            bail!("api.request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

fn validate_base_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).with_context(|| format!("Invalid API base URL '{raw}'"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!(
            "API base URL '{raw}' must use http or https, not '{other}'"
        )),
    }
}

/// Config file contents; every key optional so files only override what they set
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    api: Option<PartialApiConfig>,
    browser: Option<BrowserConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialApiConfig {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}
