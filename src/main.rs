// ABOUTME: Main entry point for visa-intake with TUI and CLI support
//
// Binary: visa-intake
// Usage: visa-intake [COMMAND]
// - No command: launches the intake TUI
// - health: check the backend
// - preview / analyze: send a saved request
// - get: fetch a consultation
// - verify: check a payment session

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use futures_util::StreamExt;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use visa_intake::api::ApiClient;
use visa_intake::app::{App, EventHandler};
use visa_intake::cli::{self, Commands};
use visa_intake::components::render_app;
use visa_intake::config::AppConfig;
use visa_intake::intake::{BrowserNavigator, TimestampIdSource};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = setup_logging() {
        // Logging is best effort; the app still works without a log file
        eprintln!("Warning: file logging disabled: {e:#}");
    }
    setup_panic_handler();

    let args = cli::Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(api_url) = args.api_url.clone() {
        config
            .set_api_url(api_url)
            .context("Invalid --api-url")?;
    }
    tracing::info!("Using backend {}", config.api.base_url);

    let api = ApiClient::from_config(&config.api).context("Failed to build HTTP client")?;
    let format = args.format;

    let result = match args.command {
        Some(Commands::Health) => cli::health::execute(&api, format).await,
        Some(Commands::Preview(file_args)) => {
            cli::consultation::preview(&api, file_args, format).await
        }
        Some(Commands::Analyze(file_args)) => {
            cli::consultation::analyze(&api, file_args, format).await
        }
        Some(Commands::Get(get_args)) => cli::consultation::get(&api, get_args, format).await,
        Some(Commands::Verify(verify_args)) => cli::payment::verify(&api, verify_args, format).await,

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let navigator = BrowserNavigator::new(config.browser.command.clone());
            let mut app = App::new(api, Box::new(TimestampIdSource), Box::new(navigator));

            let result = run_tui(&mut app).await;
            if let (Ok(()), Some(url)) = (&result, &app.state.checkout_url) {
                println!("Opened checkout in your browser: {url}");
            }
            result
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| render_app(frame, &app.state))?;

        // Runs after the draw so "Processing..." is on screen during the calls.
        // Input is still read so Ctrl-C can abandon a hung request.
        if app.state.pending_async_action.is_some() {
            app.process_pending_action_until(wait_for_interrupt(&mut events))
                .await;
            continue;
        }

        if app.state.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key_event))) => {
                    // Windows reports releases too
                    if key_event.kind == KeyEventKind::Press {
                        if let Some(app_event) =
                            EventHandler::handle_key_event(key_event, &mut app.state)
                        {
                            EventHandler::process_event(app_event, &mut app.state);
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            () = tokio::time::sleep(timeout) => {}
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C; other keys are dropped while a submission is running
async fn wait_for_interrupt(events: &mut EventStream) {
    while let Some(event) = events.next().await {
        if let Ok(Event::Key(key_event)) = event {
            if key_event.kind == KeyEventKind::Press && EventHandler::is_interrupt(&key_event) {
                return;
            }
        }
    }
    // Input closed: let the submission finish
    std::future::pending::<()>().await;
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".visa-intake").join("logs"))
        .unwrap_or_else(|| ".visa-intake/logs".into());

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "visa-intake-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "visa_intake=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
