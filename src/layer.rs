//! Precedence as data: partial patches of a settings snapshot, each tagged
//! with the layer it came from.
//!
//! A [`LayerStack`] keeps its layers sorted by [`LayerKind`] and folds them
//! onto a [`TerminalSettings`] lowest precedence first. A field left `None`
//! in a patch never touches the snapshot, so a higher layer can only
//! overwrite what it explicitly supplies.

use crate::color_table::ColorTable;
use crate::config::{
    AntialiasingMode, CursorShape, FontWeight, HorizontalAlignment, ScrollbarState, StretchMode,
    VerticalAlignment,
};
use crate::terminal_settings::TerminalSettings;

/// Where a layer comes from, in ascending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
    /// Profile fields other than its explicit colors
    Profile,
    /// The color scheme named by the profile
    ColorScheme,
    /// Colors set directly on the profile
    ProfileColors,
    /// Process-wide global settings
    Globals,
    /// Per-invocation launch arguments
    LaunchOverrides,
}

impl LayerKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            LayerKind::Profile => "profile",
            LayerKind::ColorScheme => "color scheme",
            LayerKind::ProfileColors => "profile colors",
            LayerKind::Globals => "globals",
            LayerKind::LaunchOverrides => "launch overrides",
        }
    }
}

/// A partial set of snapshot fields. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub profile_name: Option<String>,
    pub commandline: Option<String>,
    pub starting_directory: Option<String>,
    pub starting_title: Option<String>,
    pub suppress_application_title: Option<bool>,

    pub history_size: Option<i32>,
    pub snap_on_input: Option<bool>,
    pub alt_gr_aliasing: Option<bool>,
    pub cursor_shape: Option<CursorShape>,
    pub cursor_height: Option<u32>,
    pub scroll_state: Option<ScrollbarState>,

    pub font_face: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub padding: Option<String>,

    pub use_acrylic: Option<bool>,
    pub acrylic_opacity: Option<f64>,
    pub retro_terminal_effect: Option<bool>,
    pub antialiasing_mode: Option<AntialiasingMode>,

    pub default_foreground: Option<u32>,
    pub default_background: Option<u32>,
    pub selection_background: Option<u32>,
    pub cursor_color: Option<u32>,
    pub color_table: Option<ColorTable>,
    pub tab_color: Option<u32>,

    pub background_image: Option<String>,
    pub background_image_opacity: Option<f64>,
    pub background_image_stretch_mode: Option<StretchMode>,
    pub background_image_horizontal_alignment: Option<HorizontalAlignment>,
    pub background_image_vertical_alignment: Option<VerticalAlignment>,

    pub initial_rows: Option<i32>,
    pub initial_cols: Option<i32>,
    pub word_delimiters: Option<String>,
    pub copy_on_select: Option<bool>,
    pub force_full_repaint_rendering: Option<bool>,
    pub software_rendering: Option<bool>,
    pub force_vt_input: Option<bool>,
}

impl SettingsPatch {
    /// Write every present field onto `settings`
    pub fn apply_to(&self, settings: &mut TerminalSettings) {
        // Copy values held directly by the snapshot
        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = self.$field {
                        settings.$field = value;
                    }
                )*
            };
        }

        // Owned values held directly by the snapshot
        macro_rules! set_cloned {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        settings.$field.clone_from(value);
                    }
                )*
            };
        }

        // Snapshot field is itself optional; a patch can set it but never clear it
        macro_rules! set_some_cloned {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        settings.$field = Some(value.clone());
                    }
                )*
            };
        }

        set_cloned!(
            profile_name,
            commandline,
            starting_title,
            font_face,
            padding,
            word_delimiters,
        );
        set!(
            suppress_application_title,
            history_size,
            snap_on_input,
            alt_gr_aliasing,
            cursor_shape,
            cursor_height,
            scroll_state,
            font_size,
            font_weight,
            use_acrylic,
            acrylic_opacity,
            retro_terminal_effect,
            antialiasing_mode,
            default_foreground,
            default_background,
            selection_background,
            cursor_color,
            background_image_opacity,
            background_image_stretch_mode,
            background_image_horizontal_alignment,
            background_image_vertical_alignment,
            initial_rows,
            initial_cols,
            copy_on_select,
            force_full_repaint_rendering,
            software_rendering,
            force_vt_input,
        );
        set_some_cloned!(starting_directory, background_image);

        if let Some(color) = self.tab_color {
            settings.tab_color = Some(color);
        }
        if let Some(table) = &self.color_table {
            settings.color_table.set_all(table.as_array());
        }
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A patch tagged with its precedence
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsLayer {
    pub kind: LayerKind,
    pub patch: SettingsPatch,
}

impl SettingsLayer {
    pub fn new(kind: LayerKind, patch: SettingsPatch) -> Self {
        Self { kind, patch }
    }
}

/// Layers kept in precedence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStack {
    layers: Vec<SettingsLayer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Insert a layer after every layer of lower or equal precedence
    pub fn push(&mut self, layer: SettingsLayer) {
        let position = self
            .layers
            .iter()
            .position(|existing| existing.kind > layer.kind)
            .unwrap_or(self.layers.len());
        self.layers.insert(position, layer);
    }

    /// Fold every layer onto `settings`, lowest precedence first
    pub fn apply_to(&self, settings: &mut TerminalSettings) {
        for layer in &self.layers {
            log::trace!("Applying {} layer", layer.kind.display_name());
            layer.patch.apply_to(settings);
        }
    }

    /// Fold every layer onto a baseline snapshot
    pub fn build(&self) -> TerminalSettings {
        let mut settings = TerminalSettings::default();
        self.apply_to(&mut settings);
        settings
    }

    /// Layer kinds in application order
    pub fn kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|l| l.kind).collect()
    }

    pub fn get(&self, kind: LayerKind) -> Option<&SettingsLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}
