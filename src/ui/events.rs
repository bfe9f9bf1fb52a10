//! Key bindings

use super::actions::{Action, InputMode};
use crate::export::ExportFormat;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into an action for the current input mode.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match mode {
        InputMode::Search => search_mode(key),
        InputMode::ConfirmDelete => match key.code {
            KeyCode::Char('y' | 'Y') => Some(Action::ConfirmDelete),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelDelete),
            _ => None, // Ignore other keys during confirmation
        },
        InputMode::Help => overlay_mode(key, '?', Action::ToggleHelp),
        InputMode::Logs => overlay_mode(key, 'L', Action::ToggleLogs),
        InputMode::Normal => normal_mode(key),
    }
}

fn search_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Esc => Some(Action::CancelSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) if !c.is_control() => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn overlay_mode(key: KeyEvent, toggle: char, close: Action) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(close),
        KeyCode::Char(c) if c == toggle => Some(close),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        _ => None,
    }
}

fn normal_mode(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
        KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
        KeyCode::Char('J') => Action::NextDomain,
        KeyCode::Char('K') => Action::PreviousDomain,
        KeyCode::Right | KeyCode::Char('n') => Action::NextPage,
        KeyCode::Left | KeyCode::Char('p') => Action::PreviousPage,
        KeyCode::Home | KeyCode::Char('g') => Action::FirstPage,
        KeyCode::End | KeyCode::Char('G') => Action::LastPage,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('f') => Action::CycleFilter,
        KeyCode::Tab => Action::NextFilterSlot,
        KeyCode::Char('c') => Action::ClearFilters,
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Char('a') => Action::SelectPage,
        KeyCode::Char('t') => Action::ToggleField,
        KeyCode::Char('d') => Action::RequestDelete,
        KeyCode::Char('+') => Action::Duplicate,
        KeyCode::Char('e') => Action::Export(ExportFormat::Csv),
        KeyCode::Char('E') => Action::Export(ExportFormat::Json),
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('L') => Action::ToggleLogs,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}
