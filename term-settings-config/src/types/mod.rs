//! Configuration types and enums.
//!
//! Split into focused sub-modules by domain:
//! - `font`     : Font weight
//! - `rendering`: Background image stretch and alignment
//! - `terminal` : Cursor shape, scrollbar state, antialiasing mode

pub mod font;
pub mod rendering;
pub mod terminal;

pub use font::FontWeight;
pub use rendering::{BackgroundImageAlignment, HorizontalAlignment, StretchMode, VerticalAlignment};
pub use terminal::{AntialiasingMode, CursorShape, ScrollbarState};
