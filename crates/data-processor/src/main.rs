use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use processor_core::{settings::Settings, HttpInvoker};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tracing::info;

mod events;
mod logging;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            Settings::default()
        }
    };
    let _log_guard = logging::init(&settings)?;
    let invoker = Arc::new(HttpInvoker::new(settings.endpoint.clone()));
    info!(endpoint = %invoker.endpoint(), "starting data processor");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, invoker);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;
    info!("data processor stopped");

    result
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
