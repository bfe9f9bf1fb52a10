use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use opsdesk::config::Config;
use opsdesk::domains::Domain;
use opsdesk::export::ExportFormat;
use opsdesk::logger::Logger;
use opsdesk::notification::NotificationKind;
use opsdesk::ui::{map_key, render_ui, Action, App, InputMode};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;
use std::time::Instant;

fn test_config(export_dir: Option<PathBuf>) -> Config {
    let mut config = Config::default();
    config.data.simulated_latency_ms = 0;
    config.export.directory = export_dir;
    config
}

async fn loaded_app(config: &Config) -> App {
    let mut app = App::new(config, Logger::new());
    app.settle().await;
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Render the app and return the screen as one string per line.
fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(app: &App, text: &str) -> bool {
    render(app).iter().any(|line| line.contains(text))
}

#[test]
fn test_key_bindings() {
    assert_eq!(map_key(key(KeyCode::Char('j')), InputMode::Normal), Some(Action::NextRow));
    assert_eq!(map_key(key(KeyCode::Right), InputMode::Normal), Some(Action::NextPage));
    assert_eq!(map_key(key(KeyCode::Char('J')), InputMode::Normal), Some(Action::NextDomain));
    assert_eq!(
        map_key(key(KeyCode::Char('E')), InputMode::Normal),
        Some(Action::Export(ExportFormat::Json))
    );
    assert_eq!(map_key(key(KeyCode::Char('z')), InputMode::Normal), None);

    // Characters are typed while searching
    assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Search), Some(Action::SearchInput('q')));
    assert_eq!(map_key(key(KeyCode::Enter), InputMode::Search), Some(Action::SubmitSearch));

    assert_eq!(map_key(key(KeyCode::Char('y')), InputMode::ConfirmDelete), Some(Action::ConfirmDelete));
    assert_eq!(map_key(key(KeyCode::Char('j')), InputMode::ConfirmDelete), None);
    assert_eq!(map_key(key(KeyCode::Esc), InputMode::Help), Some(Action::ToggleHelp));

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(ctrl_c, InputMode::Search), Some(Action::Quit));
}

#[tokio::test]
async fn test_default_page_loads_and_renders() {
    let app = loaded_app(&test_config(None)).await;
    assert_eq!(app.page().domain(), Domain::AuditLogs);
    assert!(!app.page().is_loading());

    let snapshot = app.page().snapshot(opsdesk::utils::datetime::today());
    assert_eq!(snapshot.rows.len(), 20);
    assert_eq!(snapshot.filtered_count, 45);
    assert_eq!(snapshot.total_pages, 3);

    assert!(screen_contains(&app, "Audit Logs"));
    assert!(screen_contains(&app, "Showing 1-20 of 45 • Page 1/3"));
}

#[tokio::test]
async fn test_paging_and_search() {
    let mut app = loaded_app(&test_config(None)).await;

    app.apply(Action::LastPage);
    assert!(screen_contains(&app, "Showing 41-45 of 45 • Page 3/3"));

    app.apply(Action::StartSearch);
    assert_eq!(app.mode, InputMode::Search);
    for c in "logout".chars() {
        app.apply(Action::SearchInput(c));
    }
    app.apply(Action::SubmitSearch);
    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.page().search(), "logout");

    let snapshot = app.page().snapshot(opsdesk::utils::datetime::today());
    assert_eq!(snapshot.page, 1);
    assert!(snapshot.filtered_count < 45);
    assert!(screen_contains(&app, "45 total"));

    app.apply(Action::ClearFilters);
    assert_eq!(app.page().search(), "");
    assert_eq!(app.page().snapshot(opsdesk::utils::datetime::today()).filtered_count, 45);
}

#[tokio::test]
async fn test_filter_cycling() {
    let mut app = loaded_app(&test_config(None)).await;

    // Slot 0 is the action filter; first option after "all" is login
    app.apply(Action::CycleFilter);
    let chips = app.page().filter_chips();
    assert!(chips[0].active);
    assert_eq!(chips[0].value, "login");

    // Date slot cycles through the months present in the data
    app.apply(Action::NextFilterSlot);
    app.apply(Action::NextFilterSlot);
    assert_eq!(app.filter_slot, 2);
    app.apply(Action::CycleFilter);
    assert!(app.page().filter_chips()[2].active);

    app.apply(Action::ClearFilters);
    assert!(app.page().filter_chips().iter().all(|chip| !chip.active));
}

#[tokio::test]
async fn test_switching_pages_unmounts_previous() {
    let mut app = loaded_app(&test_config(None)).await;

    app.apply(Action::NextDomain);
    assert_eq!(app.page().domain(), Domain::Roles);
    assert!(app.page().is_loading());
    app.settle().await;
    assert_eq!(app.page().snapshot(opsdesk::utils::datetime::today()).filtered_count, 7);
    assert!(screen_contains(&app, "Roles & Permissions"));

    // The audit page dropped its rows when it was left
    assert_eq!(app.pages[0].snapshot(opsdesk::utils::datetime::today()).total_count, 0);

    app.apply(Action::PreviousDomain);
    app.apply(Action::PreviousDomain);
    assert_eq!(app.page().domain(), Domain::TimeTracking);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut config = test_config(None);
    config.ui.default_page = "roles".to_string();
    let mut app = loaded_app(&config).await;
    let first = app.page().current_id();
    assert!(first.is_some());

    app.apply(Action::RequestDelete);
    assert_eq!(app.mode, InputMode::ConfirmDelete);
    assert!(screen_contains(&app, "Delete"));

    app.apply(Action::CancelDelete);
    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.page().snapshot(opsdesk::utils::datetime::today()).filtered_count, 7);

    app.apply(Action::RequestDelete);
    app.apply(Action::ConfirmDelete);
    assert_eq!(app.page().snapshot(opsdesk::utils::datetime::today()).filtered_count, 6);
    assert_ne!(app.page().current_id(), first);

    let latest = app.notifications.active().last().unwrap();
    assert_eq!(latest.kind, NotificationKind::Success);

    // Toasts appear once the notification center ticks
    app.tick(Instant::now()).await;
    assert_eq!(app.notifications.visible().len(), 1);
    app.apply(Action::DismissNotification);
    assert!(app.notifications.is_empty());
}

#[tokio::test]
async fn test_toggle_and_duplicate() {
    let mut config = test_config(None);
    config.ui.default_page = "roles".to_string();
    let mut app = loaded_app(&config).await;

    // Administrator is the first seeded role and active
    let before = app.page().snapshot(opsdesk::utils::datetime::today());
    assert_eq!(before.rows[0].cells[0], "Administrator");
    assert_eq!(before.rows[0].cells[4], "✓");

    app.apply(Action::ToggleField);
    let after = app.page().snapshot(opsdesk::utils::datetime::today());
    assert_eq!(after.rows[0].cells[4], "·");

    app.apply(Action::Duplicate);
    let after = app.page().snapshot(opsdesk::utils::datetime::today());
    assert_eq!(after.filtered_count, 8);
    assert_eq!(after.rows.iter().filter(|r| r.cells[0] == "Administrator").count(), 2);
}

#[tokio::test]
async fn test_export_selection_to_directory() {
    let dir = std::env::temp_dir().join(format!("opsdesk_ui_export_{}", std::process::id()));
    let mut config = test_config(Some(dir.clone()));
    config.ui.default_page = "integrations".to_string();
    let mut app = loaded_app(&config).await;
    assert_eq!(app.export_dir(), &dir);

    app.apply(Action::ToggleSelect);
    app.apply(Action::NextRow);
    app.apply(Action::ToggleSelect);
    assert!(screen_contains(&app, "2 selected"));

    let path = app.export(ExportFormat::Csv).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.starts_with("id,name,category"));
    assert_eq!(app.page().snapshot(opsdesk::utils::datetime::today()).selected_count, 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_overlays_and_quit() {
    let mut app = loaded_app(&test_config(None)).await;

    app.apply(Action::ToggleHelp);
    assert_eq!(app.mode, InputMode::Help);
    app.apply(Action::ScrollDown);
    assert_eq!(app.help_scroll_offset, 1);
    app.apply(Action::ToggleHelp);
    assert_eq!(app.mode, InputMode::Normal);

    app.apply(Action::ToggleLogs);
    assert_eq!(app.mode, InputMode::Logs);
    assert!(screen_contains(&app, "Logs"));
    app.apply(Action::ToggleLogs);

    app.apply(Action::Quit);
    assert!(app.should_quit);
}
