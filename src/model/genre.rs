//! Genre palette - maps each genre to its display color

use super::catalog::Catalog;
use crate::config::PaletteEntry;
use anyhow::{anyhow, bail, Result};
use ratatui::style::Color;

/// Color used for genres missing from the palette (`#cccccc`)
pub const FALLBACK_COLOR: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

/// One legend row: a genre present in the catalog and its color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub genre: String,
    pub color: Color,
}

/// Ordered genre → color mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePalette {
    entries: Vec<LegendEntry>,
}

impl Default for GenrePalette {
    fn default() -> Self {
        Self {
            entries: vec![
                LegendEntry {
                    genre: "Fiction".to_string(),
                    color: Color::Rgb(0x31, 0x82, 0xbd),
                },
                LegendEntry {
                    genre: "Memoir".to_string(),
                    color: Color::Rgb(0x74, 0xc4, 0x76),
                },
                LegendEntry {
                    genre: "Non-Fiction".to_string(),
                    color: Color::Rgb(0xe6, 0x55, 0x0d),
                },
            ],
        }
    }
}

impl GenrePalette {
    /// Build a palette from config entries.
    ///
    /// An empty list keeps the default palette. A later entry for the same
    /// genre replaces the earlier one but keeps its position.
    pub fn from_config(entries: &[PaletteEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Ok(Self::default());
        }

        let mut palette = Self { entries: Vec::new() };
        for entry in entries {
            let color = parse_hex_color(&entry.color)
                .map_err(|e| anyhow!("genre '{}': {}", entry.genre, e))?;
            palette.insert(&entry.genre, color);
        }
        Ok(palette)
    }

    pub fn insert(&mut self, genre: &str, color: Color) {
        match self.entries.iter_mut().find(|e| e.genre == genre) {
            Some(existing) => existing.color = color,
            None => self.entries.push(LegendEntry {
                genre: genre.to_string(),
                color,
            }),
        }
    }

    /// Color for a genre, falling back to neutral grey
    pub fn color_for(&self, genre: &str) -> Color {
        self.entries
            .iter()
            .find(|e| e.genre == genre)
            .map(|e| e.color)
            .unwrap_or(FALLBACK_COLOR)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Palette entries whose genre appears in the catalog, in palette order
    pub fn legend(&self, catalog: &Catalog) -> Vec<LegendEntry> {
        if catalog.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| catalog.contains_genre(&e.genre))
            .cloned()
            .collect()
    }
}

/// Parse `#rrggbb` or `#rgb` into an RGB color
pub fn parse_hex_color(value: &str) -> Result<Color> {
    let hex = value
        .strip_prefix('#')
        .ok_or_else(|| anyhow!("color '{}' must start with '#'", value))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("color '{}' contains non-hex characters", value);
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|e| anyhow!("{}: {}", value, e));

    match hex.len() {
        6 => Ok(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            Ok(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => bail!("color '{}' must have 3 or 6 hex digits", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::book::BookRecord;

    #[test]
    fn test_color_for_known_genre() {
        let palette = GenrePalette::default();
        assert_eq!(palette.color_for("Fiction"), Color::Rgb(0x31, 0x82, 0xbd));
        assert_eq!(palette.color_for("Memoir"), Color::Rgb(0x74, 0xc4, 0x76));
    }

    #[test]
    fn test_color_for_unknown_genre_falls_back() {
        let palette = GenrePalette::default();
        assert_eq!(palette.color_for("Poetry"), FALLBACK_COLOR);
    }

    #[test]
    fn test_legend_matches_catalog_genres() {
        let palette = GenrePalette::default();
        let legend = palette.legend(&Catalog::top_loaned());
        let genres: Vec<&str> = legend.iter().map(|e| e.genre.as_str()).collect();
        assert_eq!(genres, vec!["Fiction", "Memoir", "Non-Fiction"]);
    }

    #[test]
    fn test_legend_empty_for_empty_catalog() {
        let palette = GenrePalette::default();
        assert!(palette.legend(&Catalog::new(Vec::new())).is_empty());
    }

    #[test]
    fn test_legend_omits_unused_palette_genres() {
        let mut palette = GenrePalette::default();
        palette.insert("Poetry", Color::Rgb(1, 2, 3));
        palette.insert("Horror", Color::Rgb(4, 5, 6));
        assert_eq!(palette.len(), 5);

        let legend = palette.legend(&Catalog::top_loaned());
        assert_eq!(legend.len(), 3);
        assert!(legend.iter().all(|e| e.genre != "Poetry" && e.genre != "Horror"));
    }

    #[test]
    fn test_legend_omits_catalog_genres_missing_from_palette() {
        let catalog = Catalog::new(vec![
            BookRecord::new("A", "x", 3, "Fiction", "a.jpg"),
            BookRecord::new("B", "x", 2, "Graphic Novel", "b.jpg"),
        ]);
        let legend = GenrePalette::default().legend(&catalog);
        let genres: Vec<&str> = legend.iter().map(|e| e.genre.as_str()).collect();
        assert_eq!(genres, vec!["Fiction"]);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3182bd").unwrap(), Color::Rgb(0x31, 0x82, 0xbd));
        assert_eq!(parse_hex_color("#ccc").unwrap(), Color::Rgb(0xcc, 0xcc, 0xcc));
        assert!(parse_hex_color("3182bd").is_err());
        assert!(parse_hex_color("#12").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_from_config_overrides() {
        let entries = vec![
            PaletteEntry {
                genre: "Fiction".to_string(),
                color: "#000000".to_string(),
            },
            PaletteEntry {
                genre: "Memoir".to_string(),
                color: "#fff".to_string(),
            },
            PaletteEntry {
                genre: "Fiction".to_string(),
                color: "#010203".to_string(),
            },
        ];
        let palette = GenrePalette::from_config(&entries).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_for("Fiction"), Color::Rgb(1, 2, 3));
        assert_eq!(palette.color_for("Memoir"), Color::Rgb(255, 255, 255));
        assert_eq!(palette.color_for("Non-Fiction"), FALLBACK_COLOR);
    }

    #[test]
    fn test_from_config_rejects_bad_color() {
        let entries = vec![PaletteEntry {
            genre: "Fiction".to_string(),
            color: "blue".to_string(),
        }];
        let err = GenrePalette::from_config(&entries).unwrap_err();
        assert!(err.to_string().contains("Fiction"));
    }

    #[test]
    fn test_from_config_empty_keeps_default() {
        assert_eq!(GenrePalette::from_config(&[]).unwrap(), GenrePalette::default());
    }
}
