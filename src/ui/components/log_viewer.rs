//! Overlay listing the in-memory log buffer, newest first.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::app::App;
use crate::ui::layout::LayoutManager;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub struct LogViewer;

impl LogViewer {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(80, 70, f.area());
        f.render_widget(Clear, area);

        let logs = app.logger.get_logs();
        let items: Vec<ListItem> = if logs.is_empty() {
            vec![ListItem::new("No log entries yet")]
        } else {
            logs.into_iter().skip(app.log_scroll_offset).map(ListItem::new).collect()
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(DIALOG_TITLE_LOGS))
            .style(Style::default().fg(Color::White));
        f.render_widget(list, area);
    }
}
