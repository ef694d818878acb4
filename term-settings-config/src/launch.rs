//! Per-invocation launch arguments.

use serde::{Deserialize, Serialize};

/// A one-shot request to open a new terminal.
///
/// Every field is optional; a field that is absent or empty means
/// "do not override". `profile` may hold a GUID (with or without braces) or a
/// profile name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTerminalArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,
}

impl NewTerminalArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to request a profile by GUID or name
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Builder method to override the command line
    pub fn commandline(mut self, commandline: impl Into<String>) -> Self {
        self.commandline = Some(commandline.into());
        self
    }

    /// Builder method to override the starting directory
    pub fn starting_directory(mut self, dir: impl Into<String>) -> Self {
        self.starting_directory = Some(dir.into());
        self
    }

    /// Builder method to override the starting title
    pub fn tab_title(mut self, title: impl Into<String>) -> Self {
        self.tab_title = Some(title.into());
        self
    }

    /// Requested profile identifier, if non-empty
    pub fn requested_profile(&self) -> Option<&str> {
        non_empty(self.profile.as_deref())
    }

    /// Command line override, if non-empty
    pub fn commandline_override(&self) -> Option<&str> {
        non_empty(self.commandline.as_deref())
    }

    /// Starting directory override, if non-empty
    pub fn starting_directory_override(&self) -> Option<&str> {
        non_empty(self.starting_directory.as_deref())
    }

    /// Tab title override, if non-empty
    pub fn tab_title_override(&self) -> Option<&str> {
        non_empty(self.tab_title.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
