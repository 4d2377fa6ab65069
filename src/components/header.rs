//! Header component - title, provenance line and view mode tabs

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::rect_contains;
use crate::components::text::display_width;
use crate::model::ViewMode;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TAB_GAP: u16 = 2;
const INACTIVE_TAB_BG: Color = Color::Rgb(0xe2, 0xe8, 0xf0);

/// Header with the catalog heading and the Book Shelf / Cover Grid tabs
pub struct HeaderComponent {
    heading: String,
    subtitle: String,
    accent: Color,
    mode: ViewMode,
    /// Clickable tab areas from the last draw
    tab_regions: Vec<(Rect, ViewMode)>,
}

impl HeaderComponent {
    pub fn new(heading: String, subtitle: String, accent: Color) -> Self {
        Self {
            heading,
            subtitle,
            accent,
            mode: ViewMode::default(),
            tab_regions: Vec::new(),
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Tab areas from the last draw
    #[cfg(test)]
    pub fn tab_regions(&self) -> &[(Rect, ViewMode)] {
        &self.tab_regions
    }

    /// Tab under the given cell, if any
    pub fn tab_at(&self, column: u16, row: u16) -> Option<ViewMode> {
        self.tab_regions
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, mode)| *mode)
    }

    fn tab_label(mode: ViewMode) -> String {
        format!(" {} ", mode.name())
    }
}

/// Clickable tab rectangles, centered in `area`
pub fn tab_regions(area: Rect) -> Vec<(Rect, ViewMode)> {
    let widths: Vec<u16> = ViewMode::all()
        .iter()
        .map(|m| display_width(&HeaderComponent::tab_label(*m)))
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + TAB_GAP * (widths.len() as u16 - 1);

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut regions = Vec::new();
    for (mode, width) in ViewMode::all().into_iter().zip(widths) {
        let rect = Rect::new(x, area.y, width, area.height).intersection(area);
        regions.push((rect, mode));
        x = x.saturating_add(width + TAB_GAP);
    }
    regions
}

impl Component for HeaderComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::SwitchMode(mode) = action {
            self.mode = mode;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(3)])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                self.heading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        self.tab_regions = tab_regions(inner);
        for (rect, mode) in &self.tab_regions {
            let style = if *mode == self.mode {
                Style::default()
                    .fg(Color::White)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Black).bg(INACTIVE_TAB_BG)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(Self::tab_label(*mode), style)),
                *rect,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_regions_centered() {
        let regions = tab_regions(Rect::new(1, 3, 60, 1));
        assert_eq!(regions.len(), 2);
        let (shelf, mode) = regions[0];
        assert_eq!(mode, ViewMode::Bookshelf);
        assert_eq!(shelf.width, 12);
        let (grid, mode) = regions[1];
        assert_eq!(mode, ViewMode::Grid);
        assert_eq!(grid.x, shelf.x + 12 + TAB_GAP);
        // 12 + 2 + 12 = 26 columns centered in 60
        assert_eq!(shelf.x, 1 + 17);
    }

    #[test]
    fn test_tab_at_after_layout() {
        let mut header = HeaderComponent::new(
            "Top 15 loaned books".to_string(),
            String::new(),
            Color::Magenta,
        );
        header.tab_regions = tab_regions(Rect::new(0, 0, 40, 1));
        let (grid, _) = header.tab_regions[1];
        assert_eq!(header.tab_at(grid.x, 0), Some(ViewMode::Grid));
        assert_eq!(header.tab_at(0, 0), None);
    }

    #[test]
    fn test_update_switches_active_tab() {
        let mut header = HeaderComponent::new(String::new(), String::new(), Color::Magenta);
        header.update(Action::SwitchMode(ViewMode::Grid)).unwrap();
        assert_eq!(header.mode, ViewMode::Grid);
    }
}
