//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Width of the navigation sidebar.
const SIDEBAR_WIDTH: u16 = 24;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Sidebar with the view list (left).
    pub sidebar_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Notification area (overlaid on the top right of the main area).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Body
            ])
            .split(area);

        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let main_area = columns[1];
        let width = (main_area.width / 2).max(30).min(main_area.width);
        let notification_area = Rect {
            x: main_area.right().saturating_sub(width),
            y: main_area.y,
            width,
            height: 4.min(main_area.height),
        };

        Self {
            status_area: rows[0],
            sidebar_area: columns[0],
            main_area,
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_do_not_overlap() {
        let layout = Layout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.sidebar_area.width, SIDEBAR_WIDTH);
        assert_eq!(layout.main_area.x, SIDEBAR_WIDTH);
        assert_eq!(layout.main_area.height, 29);
        assert!(layout.notification_area.right() <= layout.main_area.right());
    }

    #[test]
    fn test_tiny_terminal() {
        let layout = Layout::new(Rect::new(0, 0, 10, 2));
        assert!(layout.notification_area.height <= layout.main_area.height);
        assert!(layout.notification_area.width <= layout.main_area.width);
    }
}
