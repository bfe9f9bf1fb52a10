//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Instant;
use tokio::time::Duration;

use super::actions::InputMode;
use super::app::App;
use super::components::{
    DeleteConfirmationDialog, FilterBar, Footer, HelpPanel, LogViewer, RecordTable, Sidebar, StatusBar, Toasts,
};
use super::events::map_key;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::logger::Logger;
use crate::utils::datetime;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, logger);
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so loads and timers progress without input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key, app.mode) {
                    app.apply(action);
                }
            }
        }

        app.tick(Instant::now()).await;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draw the whole screen for the current app state
pub fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0]);
    let content = LayoutManager::content_layout(top_chunks[1]);
    let snapshot = app.page().snapshot(datetime::today());

    Sidebar::render(f, top_chunks[0], app);
    FilterBar::render(f, content[0], app);
    RecordTable::render(f, content[1], &snapshot, app.page().is_loading());
    Footer::render(f, content[2], &snapshot);
    StatusBar::render(f, chunks[1], app);
    Toasts::render(f, top_chunks[1], app.notifications.visible());

    match app.mode {
        InputMode::ConfirmDelete => DeleteConfirmationDialog::render(f, app),
        InputMode::Logs => LogViewer::render(f, app),
        InputMode::Help => HelpPanel::render(f, app),
        InputMode::Normal | InputMode::Search => {}
    }
}
