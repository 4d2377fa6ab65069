//! Model layer - catalog data and interaction state
//!
//! - `Catalog` / `BookRecord` - the ranked, read-only book data
//! - `GenrePalette` - genre colors and legend
//! - `visual` - record → spine attribute mapping
//! - `ViewState` - active view and hovered element
//! - `ModalStack` - overlay management

pub mod book;
pub mod catalog;
pub mod genre;
pub mod modal;
pub mod view_state;
pub mod visual;

pub use catalog::Catalog;
pub use genre::{GenrePalette, LegendEntry};
pub use modal::{Modal, ModalStack};
pub use view_state::{PointerTracker, ViewMode, ViewState};
pub use visual::SpineTilts;
