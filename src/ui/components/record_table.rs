//! Table of the current page's records.

use crate::constants::{EMPTY_LIST, LOADING_LIST};
use crate::ui::page::TableSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct RecordTable;

impl RecordTable {
    pub fn render(f: &mut Frame, area: Rect, snapshot: &TableSnapshot, loading: bool) {
        let block = Block::default().borders(Borders::LEFT | Borders::RIGHT);

        if loading || snapshot.rows.is_empty() {
            let message = if loading { LOADING_LIST } else { EMPTY_LIST };
            let paragraph = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(
            std::iter::once(Cell::from(" "))
                .chain(snapshot.headers.iter().map(|(label, _)| Cell::from(*label))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let widths: Vec<Constraint> = std::iter::once(Constraint::Length(2))
            .chain(snapshot.headers.iter().map(|(_, width)| Constraint::Min(*width)))
            .collect();

        let rows = snapshot.rows.iter().map(|row| {
            let mark = if row.selected { "●" } else { " " };
            let style = if row.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(std::iter::once(mark.to_string()).chain(row.cells.iter().cloned())).style(style)
        });

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = TableState::default().with_selected(Some(snapshot.cursor));
        f.render_stateful_widget(table, area, &mut state);
    }
}
