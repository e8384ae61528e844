use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use ratatui::{backend::CrosstermBackend, Terminal};
use solace::app::App;
use solace::config::{get_config, initialize_config};
use solace::logging::init_logging;
use solace::ui;
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    initialize_config()?;
    let config = get_config();

    // The handle flushes buffered log lines on drop, keep it alive for the
    // whole run.
    let _logger = init_logging(&config.log_spec)?;
    log::info!("starting solace against {}", config.backend_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(
        config.backend_url.clone(),
        config.theme,
    )));
    let res = ui::run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("event loop failed: {}", err);
        eprintln!("solace exited with an error: {}", err);
    }

    Ok(())
}
