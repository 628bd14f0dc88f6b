// ABOUTME: CLI verify command: checks a checkout session's payment status

use anyhow::{Context, Result};

use super::util::render_value;
use super::{OutputFormat, VerifyArgs};
use crate::api::ApiClient;

pub async fn verify(api: &ApiClient, args: VerifyArgs, format: OutputFormat) -> Result<()> {
    let response = api
        .verify_payment(&args.session_id)
        .await
        .with_context(|| format!("Failed to verify payment for session {}", args.session_id))?;

    println!("{}", render_value(&response, format)?);
    Ok(())
}
