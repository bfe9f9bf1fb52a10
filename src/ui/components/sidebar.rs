//! Page navigation sidebar, grouped by section.

use crate::domains::Domain;
use crate::ui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct Sidebar;

impl Sidebar {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let mut items = Vec::new();
        let mut selected = None;
        let mut section = "";

        for (index, page) in app.pages.iter().enumerate() {
            let domain: Domain = page.domain();
            if domain.section() != section {
                section = domain.section();
                items.push(ListItem::new(Line::from(Span::styled(
                    section.to_uppercase(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                ))));
            }
            if index == app.active {
                selected = Some(items.len());
            }
            items.push(ListItem::new(format!("  {}", domain.title())));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Pages"),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .highlight_symbol("›");

        let mut state = ListState::default();
        state.select(selected);
        f.render_stateful_widget(list, area, &mut state);
    }
}
