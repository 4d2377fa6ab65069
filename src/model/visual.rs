//! Visual mapping - turns book records into spine attributes
//!
//! Everything here is a pure function of a record, the catalog maximum and
//! the style constants. The only non-determinism is the cosmetic tilt, which
//! takes its random source as a parameter.

use super::book::BookRecord;
use super::genre::GenrePalette;
use crate::config::{ShelfStyle, TiltMode};
use rand::Rng;
use ratatui::style::Color;

/// Titles longer than this are shortened on spines
pub const MAX_SPINE_TITLE_CHARS: usize = 20;
/// Characters kept before the ellipsis when a title is shortened
const TRUNCATED_TITLE_CHARS: usize = 18;
const ELLIPSIS: &str = "...";

/// Visual attributes of one spine on the shelf
#[derive(Debug, Clone, PartialEq)]
pub struct SpineVisual {
    pub index: usize,
    pub height: f64,
    pub width: f64,
    pub tilt: f64,
    pub display_title: String,
    pub color: Color,
}

/// Spine height, normalized against the most loaned book
pub fn spine_height(checkouts: u32, max_checkouts: u32, style: &ShelfStyle) -> f64 {
    if max_checkouts == 0 {
        return style.base_height;
    }
    style.base_height + (checkouts as f64 / max_checkouts as f64) * style.height_range
}

/// Spine label: the title itself, or its first 18 characters plus "..."
pub fn display_title(title: &str) -> String {
    if title.chars().count() <= MAX_SPINE_TITLE_CHARS {
        return title.to_string();
    }
    let mut short: String = title.chars().take(TRUNCATED_TITLE_CHARS).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Uniform tilt in [-max, +max] degrees
pub fn random_tilt<R: Rng + ?Sized>(rng: &mut R, max_degrees: f64) -> f64 {
    if max_degrees <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-max_degrees..=max_degrees)
}

/// Glyph for the spine cap. Positive tilt leans right (clockwise).
pub fn tilt_glyph(tilt: f64) -> &'static str {
    if tilt > 0.75 {
        "╱"
    } else if tilt < -0.75 {
        "╲"
    } else {
        "▔"
    }
}

/// Number of terminal rows for a spine of the given height.
///
/// A full-height spine fills `available_rows`; every spine gets at least one.
pub fn spine_rows(height: f64, style: &ShelfStyle, available_rows: u16) -> u16 {
    if available_rows == 0 {
        return 0;
    }
    let ratio = (height / style.full_height()).clamp(0.0, 1.0);
    let rows = (ratio * available_rows as f64).round() as u16;
    rows.clamp(1, available_rows)
}

pub fn map_spine(
    book: &BookRecord,
    index: usize,
    max_checkouts: u32,
    palette: &GenrePalette,
    style: &ShelfStyle,
    tilt: f64,
) -> SpineVisual {
    SpineVisual {
        index,
        height: spine_height(book.checkouts, max_checkouts, style),
        width: style.spine_width,
        tilt,
        display_title: display_title(&book.title),
        color: palette.color_for(&book.genre),
    }
}

/// Tilt per spine, regenerated according to the tilt mode
#[derive(Debug, Clone)]
pub struct SpineTilts {
    mode: TiltMode,
    max_degrees: f64,
    tilts: Vec<f64>,
}

impl SpineTilts {
    pub fn new<R: Rng + ?Sized>(mode: TiltMode, count: usize, max_degrees: f64, rng: &mut R) -> Self {
        let tilts = (0..count).map(|_| random_tilt(rng, max_degrees)).collect();
        Self {
            mode,
            max_degrees,
            tilts,
        }
    }

    /// Tilts to use for the frame being drawn
    pub fn for_render<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[f64] {
        if self.mode == TiltMode::PerRender {
            for tilt in &mut self.tilts {
                *tilt = random_tilt(rng, self.max_degrees);
            }
        }
        &self.tilts
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> f64 {
        self.tilts.get(index).copied().unwrap_or(0.0)
    }
}
