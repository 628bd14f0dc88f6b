// ABOUTME: CLI consultation commands: preview, analyze and get
//
// preview/analyze: send a saved ConsultationRequest to the backend
// get: fetch a stored consultation by ID
// analyze renders a readable report when the response carries a full result

use anyhow::{Context, Result};
use std::fmt::Write as _;

use super::util::{load_request_file, render_value};
use super::{GetArgs, OutputFormat, RequestFileArgs};
use crate::api::ApiClient;
use crate::models::ConsultationResult;

pub async fn preview(api: &ApiClient, args: RequestFileArgs, format: OutputFormat) -> Result<()> {
    let request = load_request_file(&args.file)?;
    let response = api
        .preview_consultation(&request)
        .await
        .context("Preview request failed")?;

    println!("{}", render_value(&response, format)?);
    Ok(())
}

pub async fn analyze(api: &ApiClient, args: RequestFileArgs, format: OutputFormat) -> Result<()> {
    let request = load_request_file(&args.file)?;
    let response = api
        .analyze_consultation(&request)
        .await
        .context("Analysis request failed")?;

    let output = match (format, ConsultationResult::from_analysis(&response)) {
        (OutputFormat::Text, Some(result)) => render_report(&result),
        _ => render_value(&response, format)?,
    };
    println!("{output}");
    Ok(())
}

pub async fn get(api: &ApiClient, args: GetArgs, format: OutputFormat) -> Result<()> {
    let response = api
        .get_consultation(&args.consultation_id)
        .await
        .with_context(|| format!("Failed to fetch consultation {}", args.consultation_id))?;

    println!("{}", render_value(&response, format)?);
    Ok(())
}

/// Human-readable consultation report
pub fn render_report(result: &ConsultationResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Consultation: {}", result.consultation_id);
    let _ = writeln!(out, "{}", "━".repeat(44));
    let _ = writeln!(out, "Confidence:   {}/100", result.confidence_score);
    let _ = writeln!(out, "Processing:   {}", result.estimated_processing_time);
    let _ = writeln!(out);
    let _ = writeln!(out, "Risk assessment:");
    let _ = writeln!(out, "  {}", result.risk_assessment);

    if !result.documents_required.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Documents required:");
        for doc in &result.documents_required {
            let _ = writeln!(
                out,
                "  [{}] {} - {}",
                doc.priority.as_str().to_uppercase(),
                doc.name,
                doc.description
            );
            if let Some(notes) = &doc.notes {
                let _ = writeln!(out, "      Notes: {notes}");
            }
        }
    }

    if !result.strategic_notes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Strategic notes:");
        for note in &result.strategic_notes {
            let _ = writeln!(out, "  • {note}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Cover letter:");
    for line in result.cover_letter.lines() {
        let _ = writeln!(out, "  {line}");
    }

    if !result.sources.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources:");
        for source in &result.sources {
            let _ = writeln!(out, "  • {source}");
        }
    }

    out.trim_end().to_string()
}
