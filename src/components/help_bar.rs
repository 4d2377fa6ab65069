//! Bottom help bar - shortcut hints for the active view

use crate::model::ViewMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn hints(mode: ViewMode) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch view"), ("←/→", "Hover")];
    if mode == ViewMode::Grid {
        hints.push(("j/k", "Scroll"));
    }
    hints.extend([("Esc", "Clear"), ("?", "Help"), ("q", "Quit")]);
    hints
}

pub fn draw_help_bar(frame: &mut Frame, area: Rect, mode: ViewMode) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let spans: Vec<Span> = hints(mode)
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), key_style),
                Span::raw(format!("{}  ", label)),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
