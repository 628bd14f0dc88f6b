// ABOUTME: Shared CLI utilities for reading request files and printing responses

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::OutputFormat;
use crate::models::ConsultationRequest;

/// Load a consultation request from disk.
///
/// `.json` files are parsed as JSON, everything else as TOML. Missing fields
/// take the same defaults as a fresh wizard.
pub fn load_request_file(path: &Path) -> Result<ConsultationRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON request {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML request {}", path.display()))
    }
}

/// Pretty-printed JSON for any serializable value
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Render a raw backend response. Text output is the same pretty JSON;
/// JSON output is compact so it pipes cleanly.
pub fn render_value(value: &serde_json::Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(value).context("Failed to serialize output"),
        OutputFormat::Text => to_pretty_json(value),
    }
}
