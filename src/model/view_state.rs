//! View state - active mode and hover tracking
//!
//! `ViewState` is the only mutable state the renderers read. Hover changes
//! arrive as enter/leave transitions; a leave only clears the hover when it
//! refers to the element that is currently hovered, so a late leave from a
//! neighbouring element cannot wipe out a newer hover.

use tracing::trace;

/// Which visualization is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Bookshelf,
    Grid,
}

impl ViewMode {
    pub fn all() -> [ViewMode; 2] {
        [ViewMode::Bookshelf, ViewMode::Grid]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Bookshelf => "Book Shelf",
            ViewMode::Grid => "Cover Grid",
        }
    }

    pub fn next(&self) -> ViewMode {
        match self {
            ViewMode::Bookshelf => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Bookshelf,
        }
    }
}

/// Pointer transition for a single rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

/// Per-session interaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    hovered: Option<usize>,
    /// Number of elements that can be hovered (catalog length)
    len: usize,
}

impl ViewState {
    pub fn new(len: usize) -> Self {
        Self {
            mode: ViewMode::default(),
            hovered: None,
            len,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Switch the active view. Hover is left untouched.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Pointer entered element `index`
    pub fn enter(&mut self, index: usize) {
        if index < self.len {
            self.hovered = Some(index);
        }
    }

    /// Pointer left element `index`; stale leaves are ignored
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn apply(&mut self, event: HoverEvent) {
        let before = self.hovered;
        match event {
            HoverEvent::Enter(i) => self.enter(i),
            HoverEvent::Leave(i) => self.leave(i),
        }
        trace!(?event, ?before, after = ?self.hovered, "hover transition");
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Keyboard hover: move to the next element, wrapping around
    pub fn hover_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(i) => (i + 1) % self.len,
            None => 0,
        });
    }

    /// Keyboard hover: move to the previous element, wrapping around
    pub fn hover_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        });
    }
}

/// Turns raw pointer positions into enter/leave transitions.
///
/// Tracks which element is under the pointer independently of the hover
/// state, since keyboard navigation can move the hover without the pointer.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    under_pointer: Option<usize>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer is now over `target` (or over nothing)
    pub fn track(&mut self, target: Option<usize>) -> Vec<HoverEvent> {
        if target == self.under_pointer {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.under_pointer {
            events.push(HoverEvent::Leave(previous));
        }
        if let Some(next) = target {
            events.push(HoverEvent::Enter(next));
        }
        self.under_pointer = target;
        events
    }

    /// Forget the element under the pointer without emitting a leave.
    ///
    /// Used when the view switches: the old elements are gone rather than
    /// left, so the hover they set stays in place.
    pub fn forget(&mut self) {
        self.under_pointer = None;
    }

    #[cfg(test)]
    pub fn under_pointer(&self) -> Option<usize> {
        self.under_pointer
    }
}
