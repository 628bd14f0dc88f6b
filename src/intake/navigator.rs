//! Opening the hosted checkout page.
//!
//! Submitting the wizard ends with a hand-off to an external payment page.
//! [`Navigator`] is the seam for that hand-off; [`BrowserNavigator`] opens the
//! URL with the system browser launcher.

use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Refusing to open '{0}': only http and https URLs are supported")]
    UnsupportedScheme(String),

    #[error("No browser launcher found (tried: {0})")]
    NoLauncher(String),

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Sends the user to an external page
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Platform launchers tried when no command is configured, in order.
#[cfg(target_os = "macos")]
pub const DEFAULT_LAUNCHERS: &[&str] = &["open"];
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_LAUNCHERS: &[&str] = &["xdg-open", "gio", "sensible-browser"];

/// Check that a URL is safe to hand to a browser launcher.
pub fn validate_url(raw: &str) -> Result<url::Url, NavigationError> {
    let parsed = url::Url::parse(raw).map_err(|source| NavigationError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(NavigationError::UnsupportedScheme(raw.to_string())),
    }
}

/// Opens URLs in the user's browser
#[derive(Debug, Clone, Default)]
pub struct BrowserNavigator {
    /// Configured launcher; overrides platform detection
    command: Option<String>,
}

impl BrowserNavigator {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Resolve the launcher: configured command first, then the first installed default
    pub fn resolve_launcher(&self) -> Result<String, NavigationError> {
        if let Some(command) = &self.command {
            return Ok(command.clone());
        }

        DEFAULT_LAUNCHERS
            .iter()
            .find(|cmd| which::which(cmd).is_ok())
            .map(|cmd| (*cmd).to_string())
            .ok_or_else(|| NavigationError::NoLauncher(DEFAULT_LAUNCHERS.join(", ")))
    }

    fn launcher_args(command: &str, url: &str) -> Vec<String> {
        // gio needs its subcommand
        if command == "gio" {
            vec!["open".to_string(), url.to_string()]
        } else {
            vec![url.to_string()]
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        let url = validate_url(url)?;
        let command = self.resolve_launcher()?;

        info!("Opening {} with {}", url, command);

        Command::new(&command)
            .args(Self::launcher_args(&command, url.as_str()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NavigationError::Launch { command, source })?;

        Ok(())
    }
}
