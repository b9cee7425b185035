//! Sumstack terminal calculator.
//!
//! Run with: `cargo run -p sumstack-tui`
//!
//! The backend address resolves to the fixed local service in development
//! and to `--backend-url` / `SUMSTACK_BACKEND_URL` (with a hard-coded
//! fallback) when `--production` is set.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sumstack::client::CalcClient;
use sumstack::config::{resolve_backend_url, Mode};
use sumstack::session::Session;
use sumstack_tui::{render, App, InputHandler, KeyAction};

#[derive(Debug, Parser)]
#[command(
    name = "sumstack-tui",
    about = "Terminal calculator backed by the sumstack addition service",
    version
)]
struct Args {
    /// Backend base URL override (applies in production mode)
    #[arg(long, env = "SUMSTACK_BACKEND_URL")]
    backend_url: Option<String>,

    /// Target the deployed backend instead of the local development one
    #[arg(long)]
    production: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.production {
            Mode::Production
        } else {
            Mode::Development
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Diagnostics go to stderr so they never corrupt the drawn UI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let backend_url = resolve_backend_url(args.mode(), args.backend_url.as_deref());
    tracing::info!(backend = %backend_url, mode = ?args.mode(), "starting sumstack-tui");
    let client = CalcClient::new(backend_url.clone());
    let mut app = App::new(Session::new(client), backend_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Handle a single key action and return whether to quit
async fn handle_action<A: sumstack::client::CalculationApi>(
    app: &mut App<A>,
    action: KeyAction,
) -> bool {
    tracing::debug!(?action, "handling key action");
    match action {
        KeyAction::InsertChar(c) if InputHandler::is_valid_char(c) => app.insert_char(c),
        KeyAction::Backspace => app.backspace(),
        KeyAction::Clear => app.clear_field(),
        KeyAction::SwitchField => app.switch_field(),
        KeyAction::Submit => app.submit().await,
        KeyAction::Refresh => app.refresh().await,
        KeyAction::Quit => return true,
        KeyAction::InsertChar(_) | KeyAction::None => {}
    }
    false
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<CalcClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();

    // Eager history fetch on startup.
    app.activate().await;

    loop {
        terminal.draw(|f| render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_action(app, input_handler.handle_key(key)).await
                {
                    app.quit();
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests_support {
    use async_trait::async_trait;
    use sumstack::api::{CalculateData, CalculateResponse, HistoryResponse};
    use sumstack::client::{CalculationApi, ClientError};
    use sumstack::session::Session;
    use sumstack_tui::App;

    #[derive(Debug, Default)]
    pub struct StubApi;

    #[async_trait]
    impl CalculationApi for StubApi {
        async fn fetch_history(&self) -> Result<HistoryResponse, ClientError> {
            Ok(HistoryResponse {
                success: true,
                data: vec![],
            })
        }

        async fn calculate(&self, num1: f64, num2: f64) -> Result<CalculateResponse, ClientError> {
            Ok(CalculateResponse {
                success: true,
                message: "ok".to_string(),
                data: Some(CalculateData { result: num1 + num2 }),
            })
        }
    }

    pub fn stub_app() -> App<StubApi> {
        App::new(Session::new(StubApi), "http://localhost:5001")
    }
}
