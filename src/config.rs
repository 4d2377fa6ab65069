use crate::model::genre::parse_hex_color;
use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bounds for cell-sized style values
pub const MAX_CARD_SIZE: u16 = 100;
pub const MAX_HOVER_LIFT_ROWS: u16 = 10;
pub const MAX_SPINE_COLUMNS: u16 = 20;
pub const MAX_SPINE_GAP: u16 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event polling timeout in milliseconds
    pub tick_rate_ms: u64,
    pub style: ShelfStyle,
    /// Genre color overrides; empty keeps the built-in palette
    pub palette: Vec<PaletteEntry>,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            style: ShelfStyle::default(),
            palette: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Presentation constants shared by both views.
///
/// Heights and widths are in the same logical units as the checkout chart
/// they describe; renderers scale them to terminal cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfStyle {
    /// Height of a spine with zero checkouts
    pub base_height: f64,
    /// Extra height reached by the most loaned book
    pub height_range: f64,
    pub spine_width: f64,
    /// Terminal columns per spine (before shrinking to fit)
    pub spine_columns: u16,
    /// Columns between spines
    pub spine_gap: u16,
    /// Tilt is drawn from [-max, +max]
    pub max_tilt_degrees: f64,
    pub tilt_mode: TiltMode,
    /// Rows a hovered spine or card is raised by
    pub hover_lift_rows: u16,
    pub card_width: u16,
    pub card_height: u16,
    /// Active tab and checkout badge color
    pub accent: String,
}

impl Default for ShelfStyle {
    fn default() -> Self {
        Self {
            base_height: 150.0,
            height_range: 250.0,
            spine_width: 30.0,
            spine_columns: 3,
            spine_gap: 1,
            max_tilt_degrees: 2.0,
            tilt_mode: TiltMode::Stable,
            hover_lift_rows: 1,
            card_width: 24,
            card_height: 9,
            accent: "#8b5cf6".to_string(),
        }
    }
}

impl ShelfStyle {
    /// Height of the tallest possible spine
    pub fn full_height(&self) -> f64 {
        self.base_height + self.height_range
    }

    pub fn accent_color(&self) -> Color {
        parse_hex_color(&self.accent).unwrap_or(Color::Rgb(0x8b, 0x5c, 0xf6))
    }
}

/// When spine tilts are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltMode {
    /// Once per session, so hovering does not make spines jump
    #[default]
    Stable,
    /// Fresh tilt on every frame
    PerRender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub genre: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (e.g. "info", "debug")
    pub level: String,
    pub file_enabled: bool,
    /// Log directory; defaults to `~/.bookshelf-tui/logs`
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: true,
            file_dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.file_dir
            .clone()
            .or_else(|| Config::config_dir().map(|dir| dir.join("logs")))
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".bookshelf-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Load the user config, falling back to defaults.
    ///
    /// Logging is not set up yet when this runs, so a load failure is
    /// handed back to the caller to report once it is.
    pub fn load() -> (Config, Option<anyhow::Error>) {
        let Some(path) = Self::config_path() else {
            return (Config::default(), None);
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Config::default(), None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Read and validate a config file. `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;

        Ok(Some(config))
    }

    /// Reject values the renderers cannot work with
    pub fn validate(&self) -> Result<()> {
        let style = &self.style;
        if !(style.base_height > 0.0) {
            bail!("style.base_height must be positive");
        }
        if !(style.height_range >= 0.0) {
            bail!("style.height_range must not be negative");
        }
        if !(style.spine_width > 0.0) || style.spine_columns == 0 {
            bail!("spine width must be positive");
        }
        if !(style.max_tilt_degrees >= 0.0) || style.max_tilt_degrees > 45.0 {
            bail!("style.max_tilt_degrees must be within 0..=45");
        }
        if style.spine_columns > MAX_SPINE_COLUMNS || style.spine_gap > MAX_SPINE_GAP {
            bail!(
                "spines are limited to {} columns and a gap of {}",
                MAX_SPINE_COLUMNS,
                MAX_SPINE_GAP
            );
        }
        if style.hover_lift_rows > MAX_HOVER_LIFT_ROWS {
            bail!("style.hover_lift_rows must be at most {}", MAX_HOVER_LIFT_ROWS);
        }
        if style.card_width < 8 || style.card_height < 5 {
            bail!("cards must be at least 8x5 cells");
        }
        if style.card_width > MAX_CARD_SIZE || style.card_height > MAX_CARD_SIZE {
            bail!("cards must be at most {}x{} cells", MAX_CARD_SIZE, MAX_CARD_SIZE);
        }
        parse_hex_color(&style.accent).context("style.accent")?;
        for entry in &self.palette {
            parse_hex_color(&entry.color)
                .with_context(|| format!("palette entry '{}'", entry.genre))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_style_constants() {
        let style = ShelfStyle::default();
        assert_eq!(style.base_height, 150.0);
        assert_eq!(style.height_range, 250.0);
        assert_eq!(style.full_height(), 400.0);
        assert_eq!(style.accent_color(), Color::Rgb(0x8b, 0x5c, 0xf6));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config =
            serde_json::from_str(r#"{ "style": { "tilt_mode": "per_render" } }"#).unwrap();
        assert_eq!(parsed.style.tilt_mode, TiltMode::PerRender);
        assert_eq!(parsed.style.base_height, 150.0);
        assert_eq!(parsed.tick_rate_ms, 100);
        assert!(parsed.logging.file_enabled);
    }

    #[test]
    fn test_validate_rejects_bad_style() {
        let mut config = Config::default();
        config.style.base_height = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.max_tilt_degrees = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.card_width = 2;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.card_height = u16::MAX;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.card_width = MAX_CARD_SIZE + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.hover_lift_rows = u16::MAX;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.hover_lift_rows = MAX_HOVER_LIFT_ROWS;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.style.spine_gap = u16::MAX;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.palette.push(PaletteEntry {
            genre: "Fiction".to_string(),
            color: "not-a-color".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r##"{{ "tick_rate_ms": 50, "palette": [{{ "genre": "Fiction", "color": "#112233" }}] }}"##
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.palette.len(), 1);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_from_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "style": { "base_height": -5 } }"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
