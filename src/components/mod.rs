//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod bookshelf;
pub mod context;
pub mod grid;
pub mod header;
pub mod help_bar;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod text;

pub use bookshelf::{BookshelfScene, BookshelfView};
pub use context::RenderContext;
pub use grid::{GridScene, GridView};
pub use header::HeaderComponent;
pub use help_bar::draw_help_bar;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
