//! Resolves a color scheme by name and applies it to a settings snapshot.

use crate::color_table::ColorTable;
use crate::config::{ColorScheme, ColorSchemeRegistry};
use crate::layer::{LayerKind, SettingsLayer, SettingsPatch};
use crate::terminal_settings::TerminalSettings;

/// Applies named color schemes from a [`ColorSchemeRegistry`].
///
/// A name the registry does not know is a silent miss: nothing is written
/// and the caller decides whether that matters.
pub struct ColorSchemeApplier;

impl ColorSchemeApplier {
    /// Apply the scheme called `name` to `settings`.
    ///
    /// Overwrites the four distinguished colors and then all 16 palette
    /// entries in index order. Returns `false`, leaving `settings` untouched,
    /// when no scheme has that name.
    pub fn apply_by_name(
        settings: &mut TerminalSettings,
        name: &str,
        registry: &ColorSchemeRegistry,
    ) -> bool {
        match Self::layer_for(name, registry) {
            Some(layer) => {
                layer.patch.apply_to(settings);
                true
            }
            None => false,
        }
    }

    /// The scheme called `name` as a [`LayerKind::ColorScheme`] layer
    pub fn layer_for(name: &str, registry: &ColorSchemeRegistry) -> Option<SettingsLayer> {
        let Some(scheme) = registry.try_lookup(name) else {
            log::debug!("Color scheme '{}' not found in registry", name);
            return None;
        };
        Some(SettingsLayer::new(
            LayerKind::ColorScheme,
            Self::patch_for(scheme),
        ))
    }

    /// The fields a scheme controls, packed
    pub fn patch_for(scheme: &ColorScheme) -> SettingsPatch {
        SettingsPatch {
            default_foreground: Some(scheme.foreground.to_packed()),
            default_background: Some(scheme.background.to_packed()),
            selection_background: Some(scheme.selection_background.to_packed()),
            cursor_color: Some(scheme.cursor_color.to_packed()),
            color_table: Some(ColorTable::from_array(
                scheme.table.map(|color| color.to_packed()),
            )),
            ..Default::default()
        }
    }
}
