//! Help panel component

use crate::ui::app::App;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
OPSDESK - Operations Admin Console
==================================

NAVIGATION
----------
j/k         Move between rows (down/up)
J/K         Switch page (down/up the sidebar)
n/p         Next/previous page of results
g/G         First/last page of results

SEARCH & FILTERS
----------------
/           Search (Enter to apply, Esc to clear)
Tab         Move to the next filter
f           Cycle the highlighted filter's value
c           Clear search and filters

SELECTION & EXPORT
------------------
Space       Select/deselect the row
a           Select every row on the page
e           Export selection (or all filtered rows) as CSV
E           Export selection (or all filtered rows) as JSON

RECORDS
-------
t           Toggle the row's first on/off field
+           Duplicate the row
d           Delete the row (with confirmation)
r           Reload the page

GENERAL
-------
x           Dismiss the latest notification
L           Show logs
?           Toggle this help panel
q           Quit (Ctrl+C also quits)

Press 'Esc' or '?' to close this help panel
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame, app: &App) {
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        let lines: Vec<&str> = HELP_TEXT.lines().collect();
        let visible_height = help_area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll_offset = app.help_scroll_offset.min(max_scroll);

        let help_text = lines
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let help_paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("❓ Help")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}
