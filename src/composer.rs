//! Builds a [`TerminalSettings`] snapshot from the settings model.
//!
//! Layers, lowest precedence first:
//!
//! 1. Profile fields (directory and image paths expanded, title fallback)
//! 2. The color scheme named by the profile, when it exists
//! 3. Colors set directly on the profile
//! 4. Global settings
//! 5. Non-empty launch arguments (applied verbatim)

use crate::config::{AppSettings, GlobalSettings, NewTerminalArgs, Profile, ProfileId};
use crate::error::SettingsError;
use crate::layer::{LayerKind, LayerStack, SettingsLayer, SettingsPatch};
use crate::profile_resolver::ProfileResolver;
use crate::scheme_applier::ColorSchemeApplier;
use crate::terminal_settings::TerminalSettings;

/// Composes settings snapshots over a borrowed [`AppSettings`].
pub struct SettingsComposer;

impl SettingsComposer {
    /// Resolve the profile requested by `args` and compose its snapshot.
    ///
    /// Profile resolution is the only failure; no partial snapshot is
    /// returned.
    pub fn build_settings(
        app: &AppSettings,
        args: Option<&NewTerminalArgs>,
    ) -> Result<(ProfileId, TerminalSettings), SettingsError> {
        let (id, profile) = ProfileResolver::resolve(app, args)?;
        let settings = Self::layers(app, profile, args).build();
        log::info!("Composed settings for profile '{}'", profile.name);
        Ok((id, settings))
    }

    /// Compose the snapshot of a specific profile without launch overrides
    pub fn for_profile(app: &AppSettings, id: &ProfileId) -> Result<TerminalSettings, SettingsError> {
        let profile = ProfileResolver::resolve_id(app, id)?;
        Ok(Self::layers(app, profile, None).build())
    }

    /// The layer stack a snapshot of `profile` is folded from
    pub fn layers(app: &AppSettings, profile: &Profile, args: Option<&NewTerminalArgs>) -> LayerStack {
        let mut stack = LayerStack::new();
        stack.push(Self::profile_layer(profile, app.allow_all_env_vars));

        if let Some(name) = profile.color_scheme_name() {
            match ColorSchemeApplier::layer_for(name, &app.schemes) {
                Some(layer) => stack.push(layer),
                None => log::warn!(
                    "Profile '{}' references unknown color scheme '{}', keeping default colors",
                    profile.name,
                    name
                ),
            }
        }

        stack.push(Self::profile_colors_layer(profile));
        stack.push(Self::globals_layer(&app.globals));

        if let Some(layer) = args.map(Self::launch_layer) {
            stack.push(layer);
        }

        stack
    }

    fn profile_layer(profile: &Profile, allow_all_env_vars: bool) -> SettingsLayer {
        let alignment = profile.background_image_alignment;
        SettingsLayer::new(
            LayerKind::Profile,
            SettingsPatch {
                history_size: Some(profile.history_size),
                snap_on_input: Some(profile.snap_on_input),
                alt_gr_aliasing: Some(profile.alt_gr_aliasing),
                cursor_height: Some(profile.cursor_height),
                cursor_shape: Some(profile.cursor_shape),
                profile_name: Some(profile.name.clone()),
                use_acrylic: Some(profile.use_acrylic),
                acrylic_opacity: Some(profile.acrylic_opacity),
                font_face: Some(profile.font_face.clone()),
                font_size: Some(profile.font_size),
                font_weight: Some(profile.font_weight),
                padding: Some(profile.padding.clone()),
                commandline: Some(profile.commandline.clone()),
                starting_directory: profile.evaluated_starting_directory(allow_all_env_vars),
                starting_title: Some(profile.starting_title().to_string()),
                suppress_application_title: profile.suppress_application_title.then_some(true),
                background_image: profile.expanded_background_image_path(allow_all_env_vars),
                background_image_opacity: Some(profile.background_image_opacity),
                background_image_stretch_mode: Some(profile.background_image_stretch_mode),
                background_image_horizontal_alignment: Some(alignment.horizontal),
                background_image_vertical_alignment: Some(alignment.vertical),
                scroll_state: Some(profile.scroll_state),
                retro_terminal_effect: Some(profile.retro_terminal_effect),
                antialiasing_mode: Some(profile.antialiasing_mode),
                tab_color: profile.tab_color.map(|c| c.to_packed()),
                ..Default::default()
            },
        )
    }

    fn profile_colors_layer(profile: &Profile) -> SettingsLayer {
        SettingsLayer::new(
            LayerKind::ProfileColors,
            SettingsPatch {
                default_foreground: profile.foreground.map(|c| c.to_packed()),
                default_background: profile.background.map(|c| c.to_packed()),
                selection_background: profile.selection_background.map(|c| c.to_packed()),
                cursor_color: profile.cursor_color.map(|c| c.to_packed()),
                ..Default::default()
            },
        )
    }

    fn globals_layer(globals: &GlobalSettings) -> SettingsLayer {
        SettingsLayer::new(
            LayerKind::Globals,
            SettingsPatch {
                initial_rows: Some(globals.initial_rows),
                initial_cols: Some(globals.initial_cols),
                word_delimiters: Some(globals.word_delimiters.clone()),
                copy_on_select: Some(globals.copy_on_select),
                force_full_repaint_rendering: Some(globals.force_full_repaint_rendering),
                software_rendering: Some(globals.software_rendering),
                force_vt_input: Some(globals.force_vt_input),
                ..Default::default()
            },
        )
    }

    // The starting directory is taken as given; only profile directories are expanded.
    fn launch_layer(args: &NewTerminalArgs) -> SettingsLayer {
        SettingsLayer::new(
            LayerKind::LaunchOverrides,
            SettingsPatch {
                commandline: args.commandline_override().map(str::to_string),
                starting_directory: args.starting_directory_override().map(str::to_string),
                starting_title: args.tab_title_override().map(str::to_string),
                ..Default::default()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use uuid::Uuid;

    fn app_with(profile: Profile) -> AppSettings {
        AppSettings::new(GlobalSettings::default(), vec![profile], Vec::new())
    }

    #[test]
    fn test_layers_without_scheme_or_args() {
        let profile = Profile::with_id(Uuid::from_u128(1), "Plain");
        let app = app_with(profile.clone());
        let stack = SettingsComposer::layers(&app, &profile, None);
        assert_eq!(
            stack.kinds(),
            vec![LayerKind::Profile, LayerKind::ProfileColors, LayerKind::Globals]
        );
    }

    #[test]
    fn test_layers_with_scheme_and_args() {
        let profile = Profile::with_id(Uuid::from_u128(1), "Nordic").color_scheme("Nord");
        let app = app_with(profile.clone());
        let args = NewTerminalArgs::new();
        let stack = SettingsComposer::layers(&app, &profile, Some(&args));
        assert_eq!(
            stack.kinds(),
            vec![
                LayerKind::Profile,
                LayerKind::ColorScheme,
                LayerKind::ProfileColors,
                LayerKind::Globals,
                LayerKind::LaunchOverrides,
            ]
        );
        assert!(
            stack
                .get(LayerKind::LaunchOverrides)
                .is_some_and(|l| l.patch.is_empty())
        );
    }

    #[test]
    fn test_suppress_title_written_only_when_set() {
        let off = SettingsComposer::profile_layer(&Profile::new("a"), false);
        assert_eq!(off.patch.suppress_application_title, None);

        let on = SettingsComposer::profile_layer(
            &Profile::new("b").suppress_application_title(true),
            false,
        );
        assert_eq!(on.patch.suppress_application_title, Some(true));
    }

    #[test]
    fn test_explicit_colors_beat_scheme() {
        let profile = Profile::with_id(Uuid::from_u128(1), "Mixed")
            .color_scheme("Dracula")
            .background(Color::new(0x10, 0x20, 0x30));
        let app = app_with(profile);
        let settings =
            SettingsComposer::for_profile(&app, &Uuid::from_u128(1)).expect("composed");

        let dracula = crate::config::ColorScheme::dracula();
        assert_eq!(settings.default_background, 0x102030);
        assert_eq!(settings.default_foreground, dracula.foreground.to_packed());
    }

    #[test]
    fn test_launch_directory_is_not_expanded() {
        let profile = Profile::with_id(Uuid::from_u128(1), "Dir").starting_directory("/profile");
        let app = app_with(profile);
        let args = NewTerminalArgs::new().starting_directory("~/raw");
        let (_, settings) =
            SettingsComposer::build_settings(&app, Some(&args)).expect("composed");
        assert_eq!(settings.starting_directory.as_deref(), Some("~/raw"));
    }
}
