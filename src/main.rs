use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    process::ExitCode,
    sync::Arc,
    time::{Duration, Instant},
};
use cli_log::*;
use clap::Parser;

// Import from our local library modules
use coin_scope::{App, Cli, HttpApi, render_ui};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting coin-scope...");

    let cli = Cli::parse();

    let api = HttpApi::new(&cli.api_url, Duration::from_secs(cli.timeout))?;
    info!("Using backend at {}", cli.api_url);

    let mut app = App::new(Arc::new(api));
    app.set_mode(cli.mode);
    app.preselect(&cli.coins)?;

    if cli.once {
        return Ok(run_once(&mut app).await);
    }

    run_tui_app(&mut app).await?;
    Ok(ExitCode::SUCCESS)
}

/// Headless mode: one submit, result or error HTML on stdout.
async fn run_once(app: &mut App) -> ExitCode {
    match app.submit_html().await {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(html) => {
            println!("{html}");
            ExitCode::FAILURE
        }
    }
}

async fn run_tui_app(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, app).await;

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(coin_scope::config::TICK_RATE_MS);
    let mut last_ui_update = Instant::now();
    let ui_update_rate = Duration::from_millis(coin_scope::config::UI_UPDATE_RATE_MS);

    loop {
        if crossterm::event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key_input(key.code) {
                    return Ok(()); // Exit requested
                }
            }
        }

        // Pick up finished requests
        app.update();

        // Redraw once per second while loading so the elapsed time ticks
        let force_redraw = app.results.is_loading() && last_ui_update.elapsed() >= ui_update_rate;

        if app.needs_redraw || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            last_ui_update = Instant::now();
        }

        // Yield to the runtime so spawned requests make progress
        tokio::time::sleep(tick_rate).await;
    }
}
