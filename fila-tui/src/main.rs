//! fila - Terminal client for the barbershop queue
//!
//! Customers pick services and a barber and join the virtual queue; barbers
//! run their queue and availability; admins manage services, staff, and the
//! revenue dashboard. Everything authoritative lives in the external API.

mod app;
mod config;
mod data;
mod events;
mod ui;
mod views;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fila_client::ClientConfig;
use ratatui::prelude::*;

use app::App;
use data::DataClient;
use events::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "fila")]
#[command(about = "Terminal client for the Fila barbershop queue")]
#[command(version)]
struct Cli {
    /// API base URL (overrides FILA_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Track an existing queue entry instead of starting a new booking
    #[arg(long)]
    queue_id: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = config::Config::from_env();
    let _log_guard = config::init_logging(&config)?;

    let mut client_config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url.clone() {
        client_config.base_url = api_url;
    }
    tracing::info!(base_url = %client_config.base_url, "starting fila");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client_config, cli.queue_id).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client_config: ClientConfig,
    queue_id: Option<i64>,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(100));
    let data = DataClient::new(client_config.build(), events.sender());

    let mut app = App::new(data);
    match queue_id {
        Some(id) => app.open_queue_status(id),
        None => app.open_booking(),
    }

    while app.running {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Some(event) = events.next().await {
            match event {
                AppEvent::Key(key) => app.on_key(key),
                AppEvent::Data(data_event) => app.apply_data(data_event),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }
    }

    Ok(())
}
