//! Layout management and calculations

use crate::constants::SIDEBAR_WIDTH;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Main areas: sidebar + list on top, status bar below
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, 1.min(area.height));
        vec![top_area, status_area]
    }

    /// Sidebar on the left, list content on the right
    #[must_use]
    pub fn top_pane_layout(area: Rect) -> Vec<Rect> {
        let sidebar_width = std::cmp::min(area.width / 3, SIDEBAR_WIDTH);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Filter bar, table and pagination footer
    #[must_use]
    pub fn content_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Stack of toasts in the top-right corner
    #[must_use]
    pub fn toast_area(area: Rect, count: usize) -> Rect {
        let width = std::cmp::min(area.width, 48);
        let height = std::cmp::min(area.height, (count as u16).saturating_mul(4));
        Rect::new(area.x + area.width - width, area.y, width, height)
    }

    /// Help panel size in percent, larger on small terminals
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 90 } else { 70 };
        let help_height = if screen_height < 30 { 90 } else { 70 };
        (help_width, help_height)
    }
}
