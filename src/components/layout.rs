//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub help: Rect,
}

/// Calculate main screen layout: header, mode tabs, active view, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        help: chunks[3],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether a terminal cell lies inside `rect`
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Shift `rect` so it lies inside `bounds`, shrinking it if it is too big
pub fn fit_within(rect: Rect, bounds: Rect) -> Rect {
    let width = rect.width.min(bounds.width);
    let height = rect.height.min(bounds.height);
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect::new(
        rect.x.clamp(bounds.x, max_x),
        rect.y.clamp(bounds.y, max_y),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_stacks_vertically() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header, Rect::new(0, 0, 100, 2));
        assert_eq!(layout.tabs, Rect::new(0, 2, 100, 3));
        assert_eq!(layout.body, Rect::new(0, 5, 100, 32));
        assert_eq!(layout.help, Rect::new(0, 37, 100, 3));
    }

    #[test]
    fn test_centered_popup() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let clamped = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(clamped, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 5, 3, 2);
        assert!(rect_contains(rect, 10, 5));
        assert!(rect_contains(rect, 12, 6));
        assert!(!rect_contains(rect, 13, 6));
        assert!(!rect_contains(rect, 12, 7));
        assert!(!rect_contains(rect, 9, 5));
    }

    #[test]
    fn test_fit_within() {
        let bounds = Rect::new(0, 5, 50, 20);
        assert_eq!(fit_within(Rect::new(45, 2, 10, 4), bounds), Rect::new(40, 5, 10, 4));
        assert_eq!(fit_within(Rect::new(3, 10, 10, 4), bounds), Rect::new(3, 10, 10, 4));
        assert_eq!(fit_within(Rect::new(0, 0, 80, 40), bounds), bounds);
    }
}
