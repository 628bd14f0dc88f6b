// ABOUTME: CLI argument parsing and command routing for visa-intake
//
// Provides command-line interface for:
// - Filling in a consultation interactively (tui, default)
// - Checking the backend (health)
// - Previewing and analyzing saved requests (preview, analyze)
// - Fetching consultations and verifying payments (get, verify)

pub mod consultation;
pub mod health;
pub mod payment;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Visa Guru consultation intake - gather your travel details and check out
#[derive(Parser)]
#[command(name = "visa-intake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides config and VISA_INTAKE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Check that the backend is reachable
    Health,

    /// Preview the consultation for a saved request
    Preview(RequestFileArgs),

    /// Run the full analysis for a saved request
    Analyze(RequestFileArgs),

    /// Fetch a stored consultation
    Get(GetArgs),

    /// Verify a checkout session's payment
    Verify(VerifyArgs),
}

/// A consultation request read from disk
#[derive(clap::Args)]
pub struct RequestFileArgs {
    /// Request file (.json, anything else is read as TOML)
    #[arg(long, short)]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct GetArgs {
    /// Consultation ID
    pub consultation_id: String,
}

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Checkout session ID returned by the payment provider
    pub session_id: String,
}
