//! Status bar component

use crate::constants::STATUS_SHORTCUTS;
use crate::ui::actions::InputMode;
use crate::ui::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let (status_text, status_color) = match app.mode {
            InputMode::Search => ("Type to search • Enter: apply • Esc: clear".to_string(), Color::Yellow),
            InputMode::ConfirmDelete => ("Delete record? y: confirm • n/Esc: cancel".to_string(), Color::Red),
            _ if app.page().is_loading() => ("🔄 Loading...".to_string(), Color::Yellow),
            _ => (STATUS_SHORTCUTS.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
