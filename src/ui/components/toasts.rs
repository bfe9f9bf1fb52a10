//! Visible notifications, newest at the bottom of the stack.

use crate::notification::{Notification, NotificationKind};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct Toasts;

impl Toasts {
    fn color(kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Info => Color::Blue,
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        }
    }

    pub fn render(f: &mut Frame, area: Rect, visible: &[Notification]) {
        if visible.is_empty() {
            return;
        }
        let stack = LayoutManager::toast_area(area, visible.len());
        for (i, notification) in visible.iter().enumerate() {
            let y = stack.y + (i as u16) * 4;
            if y + 4 > stack.y + stack.height {
                break;
            }
            let toast_area = Rect::new(stack.x, y, stack.width, 4);
            f.render_widget(Clear, toast_area);
            let toast = Paragraph::new(notification.message.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(notification.title.as_str()),
                )
                .style(Style::default().fg(Self::color(notification.kind)))
                .wrap(Wrap { trim: true });
            f.render_widget(toast, toast_area);
        }
    }
}
