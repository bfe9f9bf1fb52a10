//! Dialog components

use crate::ui::app::App;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(id) = &app.delete_confirmation {
            let confirm_area = LayoutManager::centered_rect(50, 25, f.area());
            f.render_widget(Clear, confirm_area);

            let confirm_text = format!(
                "Delete {} record?\n\n\"{}\"\n\nPress 'y' to confirm or 'n'/Esc to cancel",
                app.page().schema().title,
                id
            );

            let confirm_paragraph = Paragraph::new(confirm_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("⚠️  Confirm Delete")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(confirm_paragraph, confirm_area);
        }
    }
}
