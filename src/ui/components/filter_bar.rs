//! Search box and filter chips above the table.

use crate::ui::actions::InputMode;
use crate::ui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct FilterBar;

impl FilterBar {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let page = app.page();
        let searching = app.mode == InputMode::Search;

        let search = if searching {
            format!("/{}▏", app.search_input)
        } else if page.search().is_empty() {
            "/ to search".to_string()
        } else {
            format!("/{}", page.search())
        };

        let mut spans = vec![
            Span::styled(
                search,
                if searching {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
            Span::raw("  "),
        ];

        for (slot, chip) in page.filter_chips().into_iter().enumerate() {
            let mut style = if chip.active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if slot == app.filter_slot {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("[{}: {}]", chip.label, chip.value), style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(page.schema().title),
        );
        f.render_widget(bar, area);
    }
}
