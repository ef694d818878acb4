//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on profile and
//! global-settings fields, and as the baseline of a fresh settings snapshot.

mod colors;
mod font;
mod terminal;
mod window;

// ── Font ───────────────────────────────────────────────────────────────────
pub use font::{font_face, font_size, font_weight};

// ── Window & visual appearance ─────────────────────────────────────────────
pub use window::{acrylic_opacity, background_image_opacity, cols, padding, rows};

// ── Terminal behaviour ─────────────────────────────────────────────────────
pub use terminal::{
    alt_gr_aliasing, commandline, cursor_height, history_size, profile_name, snap_on_input,
    word_delimiters,
};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{
    color_table, cursor_color, default_background, default_foreground, selection_background,
};
