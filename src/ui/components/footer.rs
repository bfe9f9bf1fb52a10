//! Pagination summary under the table.

use crate::ui::page::TableSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct Footer;

impl Footer {
    pub fn text(snapshot: &TableSnapshot) -> String {
        let mut text = format!(
            "Showing {}-{} of {} • Page {}/{}",
            snapshot.first_index, snapshot.last_index, snapshot.filtered_count, snapshot.page, snapshot.total_pages
        );
        if snapshot.filtered_count != snapshot.total_count {
            text.push_str(&format!(" • {} total", snapshot.total_count));
        }
        if snapshot.selected_count > 0 {
            text.push_str(&format!(" • {} selected", snapshot.selected_count));
        }
        text
    }

    pub fn render(f: &mut Frame, area: Rect, snapshot: &TableSnapshot) {
        let footer = Paragraph::new(Self::text(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(footer, area);
    }
}
