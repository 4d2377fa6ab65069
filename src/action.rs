//! Action enum - All possible application actions
//!
//! Components translate key and mouse events into Actions; the App applies
//! them to the view state. Every applied action is followed by a redraw.

use crate::model::ViewMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick (no input within the tick rate)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // View Mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the given view
    SwitchMode(ViewMode),
    /// Cycle to the other view
    NextMode,

    // ─────────────────────────────────────────────────────────────────────────
    // Hover
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer moved to a terminal cell
    PointerMoved { column: u16, row: u16 },
    /// Pointer clicked a terminal cell
    PointerClicked { column: u16, row: u16 },
    /// Keyboard hover on the next book
    HoverNext,
    /// Keyboard hover on the previous book
    HoverPrev,
    /// Drop the current hover
    ClearHover,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling (grid view)
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SwitchMode(mode) => write!(f, "SwitchMode({})", mode.name()),
            Action::NextMode => write!(f, "NextMode"),
            Action::PointerMoved { column, row } => write!(f, "PointerMoved({}, {})", column, row),
            Action::PointerClicked { column, row } => {
                write!(f, "PointerClicked({}, {})", column, row)
            }
            Action::HoverNext => write!(f, "HoverNext"),
            Action::HoverPrev => write!(f, "HoverPrev"),
            Action::ClearHover => write!(f, "ClearHover"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
