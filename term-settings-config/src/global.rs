//! Process-wide settings that apply to every session regardless of profile.

use serde::{Deserialize, Serialize};

use crate::profile_types::ProfileId;

/// Global application settings.
///
/// Unlike profile fields, these are authoritative: the composer always writes
/// them onto a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Profile used when a launch request names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<ProfileId>,

    #[serde(default = "crate::defaults::rows")]
    pub initial_rows: i32,

    #[serde(default = "crate::defaults::cols")]
    pub initial_cols: i32,

    /// Characters that end a word for double-click selection
    #[serde(default = "crate::defaults::word_delimiters")]
    pub word_delimiters: String,

    #[serde(default)]
    pub copy_on_select: bool,

    // ========================================================================
    // Rendering behavior
    // ========================================================================
    #[serde(default)]
    pub force_full_repaint_rendering: bool,

    #[serde(default)]
    pub software_rendering: bool,

    #[serde(default)]
    pub force_vt_input: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_profile: None,
            initial_rows: crate::defaults::rows(),
            initial_cols: crate::defaults::cols(),
            word_delimiters: crate::defaults::word_delimiters(),
            copy_on_select: false,
            force_full_repaint_rendering: false,
            software_rendering: false,
            force_vt_input: false,
        }
    }
}

impl GlobalSettings {
    /// Builder method to set the initial grid size
    pub fn with_dimensions(mut self, cols: i32, rows: i32) -> Self {
        self.initial_cols = cols;
        self.initial_rows = rows;
        self
    }

    /// Builder method to set the default profile
    pub fn with_default_profile(mut self, id: ProfileId) -> Self {
        self.default_profile = Some(id);
        self
    }

    /// Validation warnings for out-of-range values
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.initial_rows <= 0 {
            warnings.push(format!("initial_rows must be positive, got {}", self.initial_rows));
        }
        if self.initial_cols <= 0 {
            warnings.push(format!("initial_cols must be positive, got {}", self.initial_cols));
        }
        warnings
    }
}
