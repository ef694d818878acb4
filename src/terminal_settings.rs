//! The fully-resolved settings snapshot handed to a terminal session.

use serde::Serialize;

use crate::color_table::ColorTable;
use crate::config::{
    AntialiasingMode, CursorShape, FontWeight, HorizontalAlignment, ScrollbarState, StretchMode,
    VerticalAlignment, defaults,
};
use crate::error::SettingsError;

/// One terminal session's settings after every layer has been applied.
///
/// Colors are packed `0x00RRGGBB`. A fresh value holds the baseline: the
/// defaults of every field and the Campbell palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalSettings {
    // ========================================================================
    // Identity / launch
    // ========================================================================
    pub profile_name: String,
    pub commandline: String,
    pub starting_directory: Option<String>,
    pub starting_title: String,
    pub suppress_application_title: bool,

    // ========================================================================
    // Session behavior
    // ========================================================================
    pub history_size: i32,
    pub snap_on_input: bool,
    pub alt_gr_aliasing: bool,
    pub cursor_shape: CursorShape,
    pub cursor_height: u32,
    pub scroll_state: ScrollbarState,

    // ========================================================================
    // Font / layout
    // ========================================================================
    pub font_face: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub padding: String,

    // ========================================================================
    // Transparency / effects
    // ========================================================================
    pub use_acrylic: bool,
    pub acrylic_opacity: f64,
    pub retro_terminal_effect: bool,
    pub antialiasing_mode: AntialiasingMode,

    // ========================================================================
    // Colors
    // ========================================================================
    pub default_foreground: u32,
    pub default_background: u32,
    pub selection_background: u32,
    pub cursor_color: u32,
    pub color_table: ColorTable,
    pub tab_color: Option<u32>,

    // ========================================================================
    // Background image
    // ========================================================================
    pub background_image: Option<String>,
    pub background_image_opacity: f64,
    pub background_image_stretch_mode: StretchMode,
    pub background_image_horizontal_alignment: HorizontalAlignment,
    pub background_image_vertical_alignment: VerticalAlignment,

    // ========================================================================
    // Global settings
    // ========================================================================
    pub initial_rows: i32,
    pub initial_cols: i32,
    pub word_delimiters: String,
    pub copy_on_select: bool,
    pub force_full_repaint_rendering: bool,
    pub software_rendering: bool,
    pub force_vt_input: bool,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            profile_name: String::new(),
            commandline: defaults::commandline(),
            starting_directory: None,
            starting_title: String::new(),
            suppress_application_title: false,
            history_size: defaults::history_size(),
            snap_on_input: defaults::snap_on_input(),
            alt_gr_aliasing: defaults::alt_gr_aliasing(),
            cursor_shape: CursorShape::default(),
            cursor_height: defaults::cursor_height(),
            scroll_state: ScrollbarState::default(),
            font_face: defaults::font_face(),
            font_size: defaults::font_size(),
            font_weight: defaults::font_weight(),
            padding: defaults::padding(),
            use_acrylic: false,
            acrylic_opacity: defaults::acrylic_opacity(),
            retro_terminal_effect: false,
            antialiasing_mode: AntialiasingMode::default(),
            default_foreground: defaults::default_foreground(),
            default_background: defaults::default_background(),
            selection_background: defaults::selection_background(),
            cursor_color: defaults::cursor_color(),
            color_table: ColorTable::default(),
            tab_color: None,
            background_image: None,
            background_image_opacity: defaults::background_image_opacity(),
            background_image_stretch_mode: StretchMode::default(),
            background_image_horizontal_alignment: HorizontalAlignment::default(),
            background_image_vertical_alignment: VerticalAlignment::default(),
            initial_rows: defaults::rows(),
            initial_cols: defaults::cols(),
            word_delimiters: defaults::word_delimiters(),
            copy_on_select: false,
            force_full_repaint_rendering: false,
            software_rendering: false,
            force_vt_input: false,
        }
    }
}

impl TerminalSettings {
    /// Palette entry at `index` (`0..16`)
    pub fn get_color_table_entry(&self, index: i32) -> Result<u32, SettingsError> {
        self.color_table.get(index)
    }

    /// Overwrite the palette entry at `index` (`0..16`)
    pub fn set_color_table_entry(&mut self, index: i32, value: u32) -> Result<(), SettingsError> {
        self.color_table.set(index, value)
    }
}
