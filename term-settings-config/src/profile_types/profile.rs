//! Core `Profile` struct and its direct implementation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::env_vars::expand_path_with_allowlist;
use crate::themes::Color;
use crate::types::{
    AntialiasingMode, BackgroundImageAlignment, CursorShape, FontWeight, ScrollbarState,
    StretchMode,
};

/// Unique identifier for a profile
pub type ProfileId = Uuid;

/// Namespace for GUIDs derived from a profile name
const GENERATED_PROFILE_NAMESPACE: Uuid = Uuid::from_u128(0x2bde4a90_d05f_401c_9492_e40884ead1d8);

/// A terminal session profile: the template a new session is configured from.
///
/// Optional fields distinguish "not set" from any legitimate value; the
/// composer only writes them onto a snapshot when they are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for this profile.
    ///
    /// Nil when a document omits it; the loader replaces that with
    /// [`Profile::generated_id`].
    #[serde(default)]
    pub guid: ProfileId,

    /// Display name for the profile
    #[serde(default = "crate::defaults::profile_name")]
    pub name: String,

    /// Display order in the profile list
    #[serde(default)]
    pub order: usize,

    /// Hidden profiles are never picked as the implicit default
    #[serde(default)]
    pub hidden: bool,

    /// Shell command line to launch
    #[serde(default = "crate::defaults::commandline")]
    pub commandline: String,

    /// Raw starting directory; may contain `~`, `${VAR}` or `%VAR%`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,

    /// Starting title override (falls back to `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,

    /// Ignore title changes requested by the running application
    #[serde(default)]
    pub suppress_application_title: bool,

    // ========================================================================
    // Session behavior
    // ========================================================================
    #[serde(default = "crate::defaults::history_size")]
    pub history_size: i32,

    #[serde(default = "crate::defaults::snap_on_input")]
    pub snap_on_input: bool,

    #[serde(default = "crate::defaults::alt_gr_aliasing")]
    pub alt_gr_aliasing: bool,

    #[serde(default)]
    pub cursor_shape: CursorShape,

    /// Vintage cursor height, percent of the cell
    #[serde(default = "crate::defaults::cursor_height")]
    pub cursor_height: u32,

    #[serde(default)]
    pub scroll_state: ScrollbarState,

    // ========================================================================
    // Font / layout
    // ========================================================================
    #[serde(default = "crate::defaults::font_face")]
    pub font_face: String,

    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    #[serde(default = "crate::defaults::font_weight")]
    pub font_weight: FontWeight,

    /// Padding as "left, top, right, bottom" (or a single value for all sides)
    #[serde(default = "crate::defaults::padding")]
    pub padding: String,

    // ========================================================================
    // Transparency / effects
    // ========================================================================
    #[serde(default)]
    pub use_acrylic: bool,

    #[serde(default = "crate::defaults::acrylic_opacity")]
    pub acrylic_opacity: f64,

    #[serde(default)]
    pub retro_terminal_effect: bool,

    #[serde(default)]
    pub antialiasing_mode: AntialiasingMode,

    // ========================================================================
    // Colors
    // ========================================================================
    /// Name of the color scheme to apply before explicit colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_background: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_color: Option<Color>,

    // ========================================================================
    // Background image
    // ========================================================================
    /// Raw background image path; may contain `~`, `${VAR}` or `%VAR%`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(default = "crate::defaults::background_image_opacity")]
    pub background_image_opacity: f64,

    #[serde(default)]
    pub background_image_stretch_mode: StretchMode,

    #[serde(default)]
    pub background_image_alignment: BackgroundImageAlignment,
}

impl Profile {
    /// Create a new profile with the given name and a fresh GUID
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create a profile with a specific ID (for testing or deserialization)
    pub fn with_id(guid: ProfileId, name: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            order: 0,
            hidden: false,
            commandline: crate::defaults::commandline(),
            starting_directory: None,
            tab_title: None,
            suppress_application_title: false,
            history_size: crate::defaults::history_size(),
            snap_on_input: crate::defaults::snap_on_input(),
            alt_gr_aliasing: crate::defaults::alt_gr_aliasing(),
            cursor_shape: CursorShape::default(),
            cursor_height: crate::defaults::cursor_height(),
            scroll_state: ScrollbarState::default(),
            font_face: crate::defaults::font_face(),
            font_size: crate::defaults::font_size(),
            font_weight: crate::defaults::font_weight(),
            padding: crate::defaults::padding(),
            use_acrylic: false,
            acrylic_opacity: crate::defaults::acrylic_opacity(),
            retro_terminal_effect: false,
            antialiasing_mode: AntialiasingMode::default(),
            color_scheme: None,
            foreground: None,
            background: None,
            selection_background: None,
            cursor_color: None,
            tab_color: None,
            background_image: None,
            background_image_opacity: crate::defaults::background_image_opacity(),
            background_image_stretch_mode: StretchMode::default(),
            background_image_alignment: BackgroundImageAlignment::default(),
        }
    }

    /// Builder method to set the command line
    pub fn commandline(mut self, commandline: impl Into<String>) -> Self {
        self.commandline = commandline.into();
        self
    }

    /// Builder method to set the raw starting directory
    pub fn starting_directory(mut self, dir: impl Into<String>) -> Self {
        self.starting_directory = Some(dir.into());
        self
    }

    /// Builder method to set the tab title
    pub fn tab_title(mut self, title: impl Into<String>) -> Self {
        self.tab_title = Some(title.into());
        self
    }

    /// Builder method to set the color scheme name
    pub fn color_scheme(mut self, name: impl Into<String>) -> Self {
        self.color_scheme = Some(name.into());
        self
    }

    /// Builder method to set the foreground color
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Builder method to set the background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder method to set the selection background color
    pub fn selection_background(mut self, color: Color) -> Self {
        self.selection_background = Some(color);
        self
    }

    /// Builder method to set the cursor color
    pub fn cursor_color(mut self, color: Color) -> Self {
        self.cursor_color = Some(color);
        self
    }

    /// Builder method to set the tab color
    pub fn tab_color(mut self, color: Color) -> Self {
        self.tab_color = Some(color);
        self
    }

    /// Builder method to set the raw background image path
    pub fn background_image(mut self, path: impl Into<String>) -> Self {
        self.background_image = Some(path.into());
        self
    }

    /// Builder method to set display order
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Builder method to mark the profile hidden
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Builder method to suppress application-requested titles
    pub fn suppress_application_title(mut self, suppress: bool) -> Self {
        self.suppress_application_title = suppress;
        self
    }

    /// Stable GUID for a profile that has none, derived from its name
    pub fn generated_id(name: &str) -> ProfileId {
        Uuid::new_v5(&GENERATED_PROFILE_NAMESPACE, name.as_bytes())
    }

    /// Starting directory with `~` and environment references expanded.
    ///
    /// Only allowlisted variables resolve unless `allow_all_env_vars` is set.
    /// `None` when the raw directory is unset or empty.
    pub fn evaluated_starting_directory(&self, allow_all_env_vars: bool) -> Option<String> {
        non_empty(self.starting_directory.as_deref())
            .map(|raw| expand_path_with_allowlist(raw, allow_all_env_vars))
    }

    /// Background image path with `~` and environment references expanded.
    ///
    /// Same variable rules as [`Profile::evaluated_starting_directory`].
    pub fn expanded_background_image_path(&self, allow_all_env_vars: bool) -> Option<String> {
        non_empty(self.background_image.as_deref())
            .map(|raw| expand_path_with_allowlist(raw, allow_all_env_vars))
    }

    /// The explicit tab title when non-empty, otherwise the profile name
    pub fn starting_title(&self) -> &str {
        non_empty(self.tab_title.as_deref()).unwrap_or(&self.name)
    }

    /// The color scheme name when non-empty
    pub fn color_scheme_name(&self) -> Option<&str> {
        non_empty(self.color_scheme.as_deref())
    }

    /// Validate the profile configuration
    /// Returns a list of validation warnings (not errors - profiles can be incomplete)
    pub fn validate(&self, allow_all_env_vars: bool) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.name.trim().is_empty() {
            warnings.push("Profile name is empty".to_string());
        }

        if self.commandline.trim().is_empty() {
            warnings.push(format!("Profile '{}' has an empty commandline", self.name));
        }

        if !self.font_weight.is_valid() {
            warnings.push(format!(
                "Profile '{}' font weight {} is outside 1-1000",
                self.name, self.font_weight.0
            ));
        }

        if !(0.0..=1.0).contains(&self.acrylic_opacity) {
            warnings.push(format!(
                "Profile '{}' acrylic opacity {} is outside 0.0-1.0",
                self.name, self.acrylic_opacity
            ));
        }

        if !(0.0..=1.0).contains(&self.background_image_opacity) {
            warnings.push(format!(
                "Profile '{}' background image opacity {} is outside 0.0-1.0",
                self.name, self.background_image_opacity
            ));
        }

        if let Some(dir) = self.evaluated_starting_directory(allow_all_env_vars)
            && !std::path::Path::new(&dir).exists()
        {
            warnings.push(format!("Starting directory does not exist: {}", dir));
        }

        warnings
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(crate::defaults::profile_name())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new("Shell");
        assert_eq!(profile.name, "Shell");
        assert_eq!(profile.history_size, 9001);
        assert_eq!(profile.font_face, "Cascadia Mono");
        assert_eq!(profile.font_weight, FontWeight::NORMAL);
        assert!(profile.snap_on_input);
        assert!(profile.color_scheme.is_none());
        assert!(profile.foreground.is_none());
        assert!(profile.tab_color.is_none());
    }

    #[test]
    fn test_starting_title_falls_back_to_name() {
        assert_eq!(Profile::new("Alpha").starting_title(), "Alpha");
        assert_eq!(
            Profile::new("Beta").tab_title("Custom").starting_title(),
            "Custom"
        );
        assert_eq!(Profile::new("Gamma").tab_title("").starting_title(), "Gamma");
    }

    #[test]
    fn test_empty_paths_are_absent() {
        let profile = Profile::new("p").starting_directory("").background_image("");
        assert_eq!(profile.evaluated_starting_directory(false), None);
        assert_eq!(profile.expanded_background_image_path(false), None);
    }

    #[test]
    fn test_paths_are_expanded() {
        let profile = Profile::new("p")
            .starting_directory("${TERM_SETTINGS_PROFILE_TEST_UNSET:-/opt/work}")
            .background_image("/img/bg.png");
        assert_eq!(
            profile.evaluated_starting_directory(false).as_deref(),
            Some("/opt/work")
        );
        assert_eq!(
            profile.expanded_background_image_path(false).as_deref(),
            Some("/img/bg.png")
        );
    }

    #[test]
    fn test_path_expansion_follows_allowlist() {
        // SAFETY: `set_var` is `unsafe` in Rust 2024 because it races with other
        // threads reading the environment. The variable name is unique to this test.
        unsafe {
            std::env::set_var("PROFILE_SECRET_FOR_TERM_SETTINGS_TEST", "hunter2");
        }
        let profile = Profile::new("p")
            .starting_directory("/home/${PROFILE_SECRET_FOR_TERM_SETTINGS_TEST}")
            .background_image("/img/%PROFILE_SECRET_FOR_TERM_SETTINGS_TEST%.png");

        assert_eq!(
            profile.evaluated_starting_directory(false).as_deref(),
            Some("/home/${PROFILE_SECRET_FOR_TERM_SETTINGS_TEST}")
        );
        assert_eq!(
            profile.expanded_background_image_path(false).as_deref(),
            Some("/img/%PROFILE_SECRET_FOR_TERM_SETTINGS_TEST%.png")
        );
        assert_eq!(
            profile.evaluated_starting_directory(true).as_deref(),
            Some("/home/hunter2")
        );
    }

    #[test]
    fn test_generated_id_is_stable() {
        assert_eq!(Profile::generated_id("Ubuntu"), Profile::generated_id("Ubuntu"));
        assert_ne!(Profile::generated_id("Ubuntu"), Profile::generated_id("Debian"));
        assert!(!Profile::generated_id("Ubuntu").is_nil());

        let profile: Profile = serde_yaml_ng::from_str("name: NoGuid\n").expect("deserialize");
        assert!(profile.guid.is_nil());
    }

    #[test]
    fn test_color_scheme_name_ignores_empty() {
        assert_eq!(Profile::new("p").color_scheme("").color_scheme_name(), None);
        assert_eq!(
            Profile::new("p").color_scheme("Nord").color_scheme_name(),
            Some("Nord")
        );
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = "guid: 2c4de342-38b7-51cf-b940-2309a097f518\nname: Ubuntu\n";
        let profile: Profile = serde_yaml_ng::from_str(yaml).expect("deserialize");

        assert_eq!(
            profile.guid,
            Uuid::parse_str("2c4de342-38b7-51cf-b940-2309a097f518").expect("uuid")
        );
        assert_eq!(profile.name, "Ubuntu");
        assert_eq!(profile.history_size, 9001);
        assert_eq!(profile.background_image_opacity, 1.0);
        assert!(profile.starting_directory.is_none());
    }

    #[test]
    fn test_yaml_colors() {
        let yaml = r##"
name: Colorful
color_scheme: One Half Dark
foreground: "#FFFFFF"
tab_color: "#FF00AA"
"##;
        let profile: Profile = serde_yaml_ng::from_str(yaml).expect("deserialize");
        assert_eq!(profile.color_scheme.as_deref(), Some("One Half Dark"));
        assert_eq!(profile.foreground, Some(Color::new(255, 255, 255)));
        assert_eq!(profile.tab_color, Some(Color::new(255, 0, 170)));
        assert!(profile.background.is_none());
    }

    #[test]
    fn test_validate_warnings() {
        let mut profile = Profile::new("  ");
        profile.acrylic_opacity = 1.5;
        profile.font_weight = FontWeight(0);
        let warnings = profile.validate(false);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("name is empty"));

        assert!(Profile::new("Fine").validate(false).is_empty());
    }
}
