//! Bookshelf view - one genre-colored spine per book
//!
//! Spine height follows checkouts, so the shelf reads as a bar chart. The
//! hovered spine is raised and gets a tooltip with a cover placeholder
//! floating above it.

use crate::component::{Component, HitTest};
use crate::components::context::RenderContext;
use crate::components::layout::{fit_within, rect_contains};
use crate::components::text::{display_width, truncate_to_width};
use crate::config::ShelfStyle;
use crate::model::visual::{map_spine, spine_rows, tilt_glyph, SpineVisual};
use crate::model::LegendEntry;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOOLTIP_HEIGHT: u16 = 5;
const TOOLTIP_MIN_WIDTH: u16 = 18;
const COVER_WIDTH: u16 = 18;
const COVER_HEIGHT: u16 = 5;
/// Rows kept free above the tallest spine for the hover overlays
const OVERLAY_ROWS: u16 = TOOLTIP_HEIGHT + COVER_HEIGHT;
const TOOLTIP_BG: Color = Color::Black;
const TOOLTIP_MUTED: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
const PLANK_COLOR: Color = Color::Rgb(0x8b, 0x5a, 0x2b);

pub const CAPTION: &str =
    "Taller spines indicate more checkouts. Hover over a spine to see the cover.";

/// One spine placed on the shelf
#[derive(Debug, Clone, PartialEq)]
pub struct SpineElement {
    pub visual: SpineVisual,
    pub title: String,
    /// Drawn area (raised when hovered)
    pub rect: Rect,
    /// Pointer area: the drawn spine down to the shelf, so lifting a spine
    /// never moves it out from under the pointer
    pub hit_rect: Rect,
    pub lifted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub rect: Rect,
    pub title: String,
    pub byline: String,
    pub checkouts: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverReveal {
    pub rect: Rect,
    pub cover_url: String,
    pub file_name: String,
    pub color: Color,
}

/// Fully laid out bookshelf frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookshelfScene {
    pub spines: Vec<SpineElement>,
    pub tooltip: Option<Tooltip>,
    pub cover: Option<CoverReveal>,
    pub legend: Vec<LegendEntry>,
    pub plank: Rect,
    pub legend_area: Rect,
}

/// Spine width and gap (in columns) that fit `count` spines into `width`
pub fn spine_geometry(count: usize, width: u16, style: &ShelfStyle) -> (u16, u16) {
    if count == 0 {
        return (style.spine_columns, style.spine_gap);
    }
    let count = count.min(u16::MAX as usize) as u16;

    for gap in [style.spine_gap, 0] {
        let slot = width.saturating_add(gap) / count;
        let columns = slot.saturating_sub(gap).min(style.spine_columns);
        if columns >= 1 {
            return (columns, gap);
        }
    }
    (1, 0)
}

impl BookshelfScene {
    pub fn build(ctx: &RenderContext, area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(area);
        let shelf = chunks[0];

        let headroom = OVERLAY_ROWS.min(shelf.height / 2);
        let lift = ctx
            .style
            .hover_lift_rows
            .min(shelf.height.saturating_sub(headroom));
        let available_rows = shelf.height.saturating_sub(headroom + lift);

        let catalog = ctx.catalog;
        let max = catalog.max_checkouts();
        let (columns, gap) = spine_geometry(catalog.len(), shelf.width, ctx.style);
        let slot = columns.saturating_add(gap);
        let total = (catalog.len() as u16)
            .saturating_mul(slot)
            .saturating_sub(gap);
        let start_x = shelf.x + shelf.width.saturating_sub(total) / 2;
        let bottom = shelf.y + shelf.height;

        let mut spines = Vec::with_capacity(catalog.len());
        for (i, book) in catalog.books().iter().enumerate() {
            let x = start_x as usize + i * slot as usize;
            if x + columns as usize > shelf.right() as usize {
                break;
            }
            let x = x as u16;

            let visual = map_spine(book, i, max, ctx.palette, ctx.style, ctx.tilt(i));
            let rows = spine_rows(visual.height, ctx.style, available_rows);
            let lifted = ctx.state.is_hovered(i);
            let y = bottom - rows - if lifted { lift } else { 0 };

            spines.push(SpineElement {
                visual,
                title: book.title.clone(),
                rect: Rect::new(x, y, columns, rows),
                hit_rect: Rect::new(x, y, columns, bottom - y),
                lifted,
            });
        }

        let mut scene = Self {
            spines,
            tooltip: None,
            cover: None,
            legend: ctx.palette.legend(catalog),
            plank: chunks[1],
            legend_area: chunks[2],
        };

        let hovered = ctx
            .state
            .hovered()
            .and_then(|i| scene.spines.iter().find(|s| s.visual.index == i));
        if let (Some(spine), Some(book)) = (hovered, ctx.state.hovered().and_then(|i| catalog.get(i))) {
            let tooltip = Tooltip {
                rect: Rect::default(),
                title: book.title.clone(),
                byline: book.byline(),
                checkouts: book.checkouts_label(),
            };
            let text_width = [&tooltip.title, &tooltip.byline, &tooltip.checkouts]
                .iter()
                .map(|s| display_width(s))
                .max()
                .unwrap_or(0);
            let width = (text_width + 4).max(TOOLTIP_MIN_WIDTH);
            let center = spine.rect.x + spine.rect.width / 2;

            let tooltip_rect = fit_within(
                Rect::new(
                    center.saturating_sub(width / 2),
                    spine.rect.y.saturating_sub(TOOLTIP_HEIGHT),
                    width,
                    TOOLTIP_HEIGHT,
                ),
                shelf,
            );
            let cover_rect = fit_within(
                Rect::new(
                    center.saturating_sub(COVER_WIDTH / 2),
                    tooltip_rect.y.saturating_sub(COVER_HEIGHT),
                    COVER_WIDTH,
                    COVER_HEIGHT,
                ),
                shelf,
            );

            scene.cover = Some(CoverReveal {
                rect: cover_rect,
                cover_url: book.cover_url.clone(),
                file_name: book.cover_file_name().to_string(),
                color: spine.visual.color,
            });
            scene.tooltip = Some(Tooltip {
                rect: tooltip_rect,
                ..tooltip
            });
        }

        scene
    }
}

/// Bookshelf view component
#[derive(Default)]
pub struct BookshelfView {
    scene: BookshelfScene,
}

impl BookshelfView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scene to draw on the next `draw`
    pub fn set_scene(&mut self, scene: BookshelfScene) {
        self.scene = scene;
    }

    pub fn scene(&self) -> &BookshelfScene {
        &self.scene
    }

    fn draw_spine(frame: &mut Frame, spine: &SpineElement) {
        let rect = spine.rect.intersection(frame.area());
        if rect.is_empty() {
            return;
        }

        frame.render_widget(
            Block::default().style(Style::default().bg(spine.visual.color)),
            rect,
        );

        let mut text_style = Style::default()
            .fg(Color::White)
            .bg(spine.visual.color)
            .add_modifier(Modifier::BOLD);
        if spine.lifted {
            text_style = text_style.add_modifier(Modifier::UNDERLINED);
        }

        let mid = rect.x + rect.width / 2;
        let buf = frame.buffer_mut();
        buf.set_string(mid, rect.y, tilt_glyph(spine.visual.tilt), text_style);

        // Title runs down the spine, one character per row
        let rows = rect.height.saturating_sub(1) as usize;
        for (offset, c) in spine.visual.display_title.chars().take(rows).enumerate() {
            let mut cell = [0u8; 4];
            buf.set_string(
                mid,
                rect.y + 1 + offset as u16,
                c.encode_utf8(&mut cell),
                text_style,
            );
        }
    }

    fn draw_tooltip(frame: &mut Frame, tooltip: &Tooltip) {
        let inner_width = tooltip.rect.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&tooltip.title, inner_width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&tooltip.byline, inner_width),
                Style::default().fg(TOOLTIP_MUTED),
            )),
            Line::from(Span::styled(
                tooltip.checkouts.clone(),
                Style::default().fg(Color::White),
            )),
        ];

        frame.render_widget(Clear, tooltip.rect);
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .style(Style::default().bg(TOOLTIP_BG))
                .alignment(Alignment::Center),
            tooltip.rect,
        );
    }

    fn draw_cover(frame: &mut Frame, cover: &CoverReveal) {
        let inner_width = cover.rect.width.saturating_sub(2) as usize;
        let art = Span::styled("░".repeat(inner_width), Style::default().fg(cover.color));
        let lines = vec![
            Line::from(art.clone()),
            Line::from(Span::styled(
                truncate_to_width(&cover.file_name, inner_width),
                Style::default().fg(Color::Gray),
            )),
            Line::from(art),
        ];

        frame.render_widget(Clear, cover.rect);
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(cover.color))
                        .title(" Cover "),
                )
                .alignment(Alignment::Center),
            cover.rect,
        );
    }

    fn draw_legend(&self, frame: &mut Frame) {
        let mut spans = Vec::new();
        for (i, entry) in self.scene.legend.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("■ ", Style::default().fg(entry.color)));
            spans.push(Span::raw(entry.genre.clone()));
        }

        let legend = Paragraph::new(vec![
            Line::from(spans),
            Line::from(Span::styled(CAPTION, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(legend, self.scene.legend_area);
    }
}

impl Component for BookshelfView {
    fn draw(&mut self, frame: &mut Frame, _area: Rect) -> Result<()> {
        for spine in &self.scene.spines {
            Self::draw_spine(frame, spine);
        }

        let plank = self.scene.plank;
        if !plank.is_empty() {
            frame.render_widget(
                Paragraph::new("▀".repeat(plank.width as usize))
                    .style(Style::default().fg(PLANK_COLOR)),
                plank,
            );
        }

        self.draw_legend(frame);

        if let Some(cover) = &self.scene.cover {
            Self::draw_cover(frame, cover);
        }
        if let Some(tooltip) = &self.scene.tooltip {
            Self::draw_tooltip(frame, tooltip);
        }
        Ok(())
    }
}

impl HitTest for BookshelfView {
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.scene
            .spines
            .iter()
            .find(|s| rect_contains(s.hit_rect, column, row))
            .map(|s| s.visual.index)
    }
}
