//! Shared inputs for the view renderers

use crate::config::ShelfStyle;
use crate::model::{Catalog, GenrePalette, ViewState};

/// Everything a view needs to derive its frame.
///
/// Views are redrawn from scratch whenever the view state changes, so a
/// frame is a pure function of these inputs.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub palette: &'a GenrePalette,
    pub state: &'a ViewState,
    pub style: &'a ShelfStyle,
    /// Tilt per catalog index, in degrees
    pub tilts: &'a [f64],
}

impl RenderContext<'_> {
    pub fn tilt(&self, index: usize) -> f64 {
        self.tilts.get(index).copied().unwrap_or(0.0)
    }
}
