//! Terminal UI for antiquity that lets users pick a date range and population groups
//! and view settlement statistics.

mod app;
mod config;
mod input;
#[cfg(test)]
mod testing;
mod ui;

use std::{
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use anyhow::{Context, Result};
use antiquity_core::{roster::Roster, service::SettlementService};
use antiquity_provider_pleiades::PleiadesPlaceProvider;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Screen};
use crate::config::{AppConfig, LogConfig};
use crate::input::Action;

const DEFAULT_CONFIG: &str = "antiquity.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file (defaults to ./antiquity.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?;

    init_logging(&config.log)?;
    tracing::info!(base_url = %config.provider.base_url, "antiquity starting");

    // HTTP + service setup
    let client = Client::builder()
        .user_agent(config.provider.user_agent.as_str())
        .timeout(StdDuration::from_secs(config.provider.timeout_secs))
        .build()?;

    let provider = Arc::new(PleiadesPlaceProvider::with_base_url(
        client,
        config.provider.base_url.as_str(),
    ));
    let service = Arc::new(SettlementService::new(provider, Roster::default()));

    // App state
    let app = App::new(service, config.query);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("antiquity stopped");
    res
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(log: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log.file)
        .with_context(|| format!("Failed to open log file: {}", log.file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .with_context(|| format!("Invalid log filter: {}", log.filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::RunQuery => {
                    let years = match app.parse_years() {
                        Ok(years) => years,
                        Err(msg) => {
                            app.error_message = Some(msg);
                            continue;
                        }
                    };

                    app.is_loading = true;
                    app.error_message = None;
                    app.screen = Screen::Results;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let groups = app.selected_groups.clone();
                    let statistics = app
                        .service
                        .compute_statistics(&groups, years.start, years.end, years.current)
                        .await;
                    let settlements = app
                        .service
                        .settlements_for_map(&groups, years.start, years.end, Some(years.current))
                        .await;

                    tracing::info!(
                        groups = groups.len(),
                        settlements = settlements.len(),
                        current_year = years.current,
                        "query finished"
                    );

                    app.is_loading = false;
                    app.statistics = statistics;
                    app.settlements = settlements;
                    app.last_query = Some(years);
                    if app.settlements.is_empty() && !groups.is_empty() {
                        app.error_message =
                            Some("No settlements found for the selected groups and years".into());
                    }
                }
            }
        }
    }

    Ok(())
}
