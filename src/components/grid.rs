//! Grid view - a wrapping grid of cover cards
//!
//! Cards have a fixed size and show the full title; only the hovered card
//! is styled differently (raised, with a shadow and an accent border).

use crate::component::{Component, HitTest};
use crate::components::context::RenderContext;
use crate::components::layout::rect_contains;
use crate::components::text::{truncate_to_width, wrap_words};
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const H_GAP: u16 = 2;
const V_GAP: u16 = 1;
const SHADOW_COLOR: Color = Color::Rgb(0x40, 0x40, 0x40);

#[derive(Debug, Clone, PartialEq)]
pub struct CardElement {
    pub index: usize,
    pub rect: Rect,
    /// Pointer area, including the row a raised card was lifted off
    pub hit_rect: Rect,
    pub shadow: Option<Rect>,
    pub lifted: bool,
    pub title: String,
    pub author: String,
    pub badge: String,
    pub cover_file: String,
}

/// Laid out grid frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridScene {
    pub cards: Vec<CardElement>,
    pub columns: usize,
    pub total_rows: usize,
    pub visible_rows: usize,
    /// First visible card row (clamped)
    pub scroll: usize,
}

impl GridScene {
    pub fn build(ctx: &RenderContext, area: Rect, scroll: usize) -> Self {
        let style = ctx.style;
        let lift = style.hover_lift_rows;
        let card_width = style.card_width.min(area.width);
        let card_height = style.card_height;

        let slot_width = card_width.saturating_add(H_GAP);
        let slot_height = card_height.saturating_add(V_GAP);

        let columns = (area.width.saturating_add(H_GAP) / slot_width).max(1) as usize;
        let count = ctx.catalog.len();
        let total_rows = count.div_ceil(columns);
        let visible_rows =
            (area.height.saturating_sub(lift).saturating_add(V_GAP) / slot_height) as usize;
        let scroll = scroll.min(total_rows.saturating_sub(visible_rows));

        let grid_width = (columns as u16)
            .saturating_mul(slot_width)
            .saturating_sub(H_GAP);
        let start_x = area.x.saturating_add(area.width.saturating_sub(grid_width) / 2);
        let start_y = area.y.saturating_add(lift);

        let mut cards = Vec::new();
        for (i, book) in ctx.catalog.books().iter().enumerate() {
            let row = i / columns;
            if row < scroll || row >= scroll + visible_rows {
                continue;
            }
            let col = (i % columns) as u16;
            let x = start_x.saturating_add(col.saturating_mul(slot_width));
            let y = start_y.saturating_add(((row - scroll) as u16).saturating_mul(slot_height));

            let lifted = ctx.state.is_hovered(i);
            let y = if lifted { y.saturating_sub(lift) } else { y };
            let rect = Rect::new(x, y, card_width, card_height);
            let hit_height = card_height.saturating_add(if lifted { lift } else { 0 });
            let hit_rect = Rect::new(x, y, card_width, hit_height);
            let shadow = lifted.then(|| {
                Rect::new(x.saturating_add(1), y.saturating_add(1), card_width, card_height)
                    .intersection(area)
            });

            cards.push(CardElement {
                index: i,
                rect,
                hit_rect,
                shadow,
                lifted,
                title: book.title.clone(),
                author: book.author.clone(),
                badge: book.checkouts_label(),
                cover_file: book.cover_file_name().to_string(),
            });
        }

        Self {
            cards,
            columns,
            total_rows,
            visible_rows,
            scroll,
        }
    }
}

/// Grid view component; owns the scroll position
pub struct GridView {
    scroll: usize,
    accent: Color,
    scene: GridScene,
}

impl GridView {
    pub fn new(accent: Color) -> Self {
        Self {
            scroll: 0,
            accent,
            scene: GridScene::default(),
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn set_scene(&mut self, scene: GridScene) {
        self.scroll = scene.scroll;
        self.scene = scene;
    }

    pub fn scene(&self) -> &GridScene {
        &self.scene
    }

    /// Scroll by whole card rows; clamped again on the next layout
    pub fn scroll_by(&mut self, rows: isize) {
        let max = self.scene.total_rows.saturating_sub(self.scene.visible_rows);
        self.scroll = self.scroll.saturating_add_signed(rows).min(max);
    }

    pub fn page_rows(&self) -> isize {
        self.scene.visible_rows.max(1) as isize
    }

    /// Scroll just enough for the card at `index` to be visible
    pub fn ensure_visible(&mut self, index: usize) {
        if self.scene.columns == 0 || self.scene.visible_rows == 0 {
            return;
        }
        let row = index / self.scene.columns;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + self.scene.visible_rows {
            self.scroll = row + 1 - self.scene.visible_rows;
        }
    }

    fn draw_card(&self, frame: &mut Frame, card: &CardElement) {
        let inner_width = card.rect.width.saturating_sub(2) as usize;
        let inner_height = card.rect.height.saturating_sub(2) as usize;

        let title_lines = wrap_words(&card.title, inner_width);
        let art_rows = inner_height.saturating_sub(title_lines.len() + 3);
        let art = "▒".repeat(inner_width.saturating_sub(4));

        let mut lines: Vec<Line> = (0..art_rows)
            .map(|_| Line::from(Span::styled(art.clone(), Style::default().fg(Color::DarkGray))))
            .collect();
        lines.push(Line::from(Span::styled(
            truncate_to_width(&card.cover_file, inner_width),
            Style::default().fg(Color::Gray),
        )));
        lines.extend(title_lines.into_iter().map(|l| {
            Line::from(Span::styled(l, Style::default().add_modifier(Modifier::BOLD)))
        }));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&card.author, inner_width),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(" {} ", card.badge),
            Style::default()
                .fg(Color::White)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD),
        )));

        let border_style = if card.lifted {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if let Some(shadow) = card.shadow {
            frame.render_widget(
                Block::default().style(Style::default().bg(SHADOW_COLOR)),
                shadow,
            );
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                )
                .style(Style::default().bg(Color::Reset))
                .alignment(Alignment::Center),
            card.rect,
        );
    }
}

impl Component for GridView {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Raised cards last so their shadow sits on top of neighbours
        for card in self.scene.cards.iter().filter(|c| !c.lifted) {
            self.draw_card(frame, card);
        }
        for card in self.scene.cards.iter().filter(|c| c.lifted) {
            self.draw_card(frame, card);
        }

        if self.scene.total_rows > self.scene.visible_rows {
            let mut scrollbar_state =
                ScrollbarState::new(self.scene.total_rows - self.scene.visible_rows)
                    .position(self.scene.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area,
                &mut scrollbar_state,
            );
        }
        Ok(())
    }
}

impl HitTest for GridView {
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.scene
            .cards
            .iter()
            .find(|c| rect_contains(c.hit_rect, column, row))
            .map(|c| c.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShelfStyle;
    use crate::model::{Catalog, GenrePalette, ViewState};
    use ratatui::{backend::TestBackend, Terminal};

    fn build(state: &ViewState, area: Rect, scroll: usize) -> GridScene {
        let catalog = Catalog::top_loaned();
        let palette = GenrePalette::default();
        let style = ShelfStyle::default();
        let ctx = RenderContext {
            catalog: &catalog,
            palette: &palette,
            state,
            style: &style,
            tilts: &[],
        };
        GridScene::build(&ctx, area, scroll)
    }

    #[test]
    fn test_all_cards_in_catalog_order() {
        let state = ViewState::new(15);
        let scene = build(&state, Rect::new(0, 0, 80, 60), 0);

        assert_eq!(scene.columns, 3);
        assert_eq!(scene.total_rows, 5);
        assert_eq!(scene.cards.len(), 15);
        let indices: Vec<usize> = scene.cards.iter().map(|c| c.index).collect();
        assert_eq!(indices, (0..15).collect::<Vec<_>>());
        assert_eq!(scene.cards[0].title, "The Frozen River");
        assert_eq!(scene.cards[0].badge, "235 checkouts");
        assert_eq!(scene.cards[14].title, "The Briar Club");

        // row-major wrapping
        assert_eq!(scene.cards[0].rect.y, scene.cards[2].rect.y);
        assert!(scene.cards[3].rect.y > scene.cards[2].rect.y);
        assert_eq!(scene.cards[3].rect.x, scene.cards[0].rect.x);
    }

    #[test]
    fn test_cards_have_fixed_size() {
        let state = ViewState::new(15);
        let scene = build(&state, Rect::new(0, 0, 80, 60), 0);
        assert!(scene.cards.iter().all(|c| c.rect.width == 24 && c.rect.height == 9));
    }

    #[test]
    fn test_full_titles_on_cards() {
        let state = ViewState::new(15);
        let scene = build(&state, Rect::new(0, 0, 80, 60), 0);
        assert!(scene
            .cards
            .iter()
            .any(|c| c.title == "The Borrowed Life of Frederick Fife"));
    }

    #[test]
    fn test_only_hovered_card_is_lifted() {
        let mut state = ViewState::new(15);
        state.enter(4);
        let scene = build(&state, Rect::new(0, 0, 80, 60), 0);

        let lifted: Vec<usize> = scene.cards.iter().filter(|c| c.lifted).map(|c| c.index).collect();
        assert_eq!(lifted, vec![4]);

        let card = &scene.cards[4];
        let neighbour = &scene.cards[3];
        assert_eq!(card.rect.y + 1, neighbour.rect.y);
        assert!(card.shadow.is_some());
        assert!(neighbour.shadow.is_none());
        assert_eq!(card.hit_rect.height, card.rect.height + 1);
    }

    #[test]
    fn test_columns_adapt_to_width() {
        let state = ViewState::new(15);
        assert_eq!(build(&state, Rect::new(0, 0, 120, 60), 0).columns, 4);
        assert_eq!(build(&state, Rect::new(0, 0, 30, 60), 0).columns, 1);
        assert_eq!(build(&state, Rect::new(0, 0, 10, 60), 0).columns, 1);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let state = ViewState::new(15);
        let scene = build(&state, Rect::new(0, 0, 80, 30), 10);
        assert_eq!(scene.visible_rows, 3);
        assert_eq!(scene.scroll, 2);
        assert_eq!(scene.cards.first().map(|c| c.index), Some(6));
        assert_eq!(scene.cards.len(), 9);
    }

    #[test]
    fn test_ensure_visible_and_scroll_by() {
        let state = ViewState::new(15);
        let mut view = GridView::new(Color::Magenta);
        view.set_scene(build(&state, Rect::new(0, 0, 80, 30), 0));

        view.ensure_visible(14);
        assert_eq!(view.scroll(), 2);
        view.ensure_visible(0);
        assert_eq!(view.scroll(), 0);

        view.scroll_by(1);
        assert_eq!(view.scroll(), 1);
        view.scroll_by(10);
        assert_eq!(view.scroll(), 2);
        view.scroll_by(-5);
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_oversized_style_does_not_overflow() {
        let catalog = Catalog::top_loaned();
        let palette = GenrePalette::default();
        let mut state = ViewState::new(15);
        state.enter(0);
        let area = Rect::new(0, 5, 100, 32);

        for (card_height, lift) in [(u16::MAX, 1), (9, u16::MAX), (u16::MAX, u16::MAX)] {
            let style = ShelfStyle {
                card_height,
                hover_lift_rows: lift,
                ..ShelfStyle::default()
            };
            let ctx = RenderContext {
                catalog: &catalog,
                palette: &palette,
                state: &state,
                style: &style,
                tilts: &[],
            };
            let scene = GridScene::build(&ctx, area, 0);
            assert_eq!(scene.visible_rows, 0);
            assert!(scene.cards.is_empty());
        }
    }

    #[test]
    fn test_hit_test() {
        let mut state = ViewState::new(15);
        state.enter(1);
        let mut view = GridView::new(Color::Magenta);
        view.set_scene(build(&state, Rect::new(0, 0, 80, 60), 0));

        let card = view.scene().cards[1].clone();
        assert_eq!(view.hit_test(card.rect.x + 2, card.rect.y), Some(1));
        assert_eq!(view.hit_test(card.rect.x + 2, card.rect.y + card.rect.height), Some(1));
        assert_eq!(view.hit_test(0, 0), None);
    }

    #[test]
    fn test_render_cards() {
        let state = ViewState::new(15);
        let mut view = GridView::new(Color::Magenta);
        view.set_scene(build(&state, Rect::new(0, 0, 80, 60), 0));

        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.draw(frame, area).unwrap();
            })
            .unwrap();
        let rows: Vec<String> = terminal
            .backend()
            .buffer()
            .content
            .chunks(80)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();

        assert!(rows.iter().any(|r| r.contains("The Frozen River")));
        assert!(rows.iter().any(|r| r.contains("Percival Everett")));
        assert!(rows.iter().any(|r| r.contains("79 checkouts")));
        assert!(rows.iter().any(|r| r.contains("Frederick Fife")));
    }
}
