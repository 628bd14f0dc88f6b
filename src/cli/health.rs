// ABOUTME: CLI health command: reports whether the consultation backend is up

use anyhow::{Context, Result};

use super::util::to_pretty_json;
use super::OutputFormat;
use crate::api::{ApiClient, HealthStatus};

pub async fn execute(api: &ApiClient, format: OutputFormat) -> Result<()> {
    let health = api
        .health_check()
        .await
        .with_context(|| format!("Health check against {} failed", api.base_url()))?;

    println!("{}", render(&health, api.base_url(), format)?);
    Ok(())
}

pub fn render(health: &HealthStatus, base_url: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(health),
        OutputFormat::Text => Ok(format!("Backend {}: {}", base_url, health.status)),
    }
}
