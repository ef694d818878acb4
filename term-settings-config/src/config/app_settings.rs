//! The `AppSettings` aggregate: globals plus the profile and scheme registries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::global::GlobalSettings;
use crate::launch::NewTerminalArgs;
use crate::profile_types::{Profile, ProfileId, ProfileManager};
use crate::schemes::ColorSchemeRegistry;
use crate::themes::ColorScheme;

/// GUID of the profile present in a default settings document
pub const DEFAULT_PROFILE_ID: ProfileId = Uuid::from_u128(0x61c54bbd_c2c6_5271_96e7_009a87ff44bf);

/// Everything the composer reads: global settings, all profiles, all schemes.
///
/// Read-only once built; composition only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub globals: GlobalSettings,
    pub profiles: ProfileManager,
    pub schemes: ColorSchemeRegistry,
    /// Whether profile paths may reference any environment variable,
    /// mirroring the document's `allow_all_env_vars`
    pub allow_all_env_vars: bool,
}

impl AppSettings {
    /// Build from parts. The scheme registry is seeded with the built-ins and
    /// `schemes` are layered on top, replacing built-ins of the same name.
    pub fn new(globals: GlobalSettings, profiles: Vec<Profile>, schemes: Vec<ColorScheme>) -> Self {
        let mut registry = ColorSchemeRegistry::with_builtin();
        for scheme in schemes {
            registry.insert(scheme);
        }
        Self {
            globals,
            profiles: ProfileManager::from_profiles(profiles),
            schemes: registry,
            allow_all_env_vars: false,
        }
    }

    /// Let profile paths resolve environment variables outside the allowlist
    pub fn with_allow_all_env_vars(mut self, allow: bool) -> Self {
        self.allow_all_env_vars = allow;
        self
    }

    /// Look up a profile by GUID
    pub fn find_profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    /// Map launch arguments to a profile identity without failing.
    ///
    /// - A requested identifier that parses as a GUID is returned as-is; the
    ///   caller checks that it exists.
    /// - Any other requested identifier is looked up by name.
    /// - With no request, `globals.default_profile` is used when set, otherwise
    ///   the first visible profile in display order.
    pub fn profile_for_args(&self, args: Option<&NewTerminalArgs>) -> Option<ProfileId> {
        match args.and_then(NewTerminalArgs::requested_profile) {
            Some(requested) => match parse_profile_id(requested) {
                Some(id) => Some(id),
                None => self.profiles.find_by_name(requested).map(|p| p.guid),
            },
            None => self
                .globals
                .default_profile
                .or_else(|| self.profiles.first_visible().map(|p| p.guid)),
        }
    }

    /// Warnings about the settings as a whole (never fatal)
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = self.globals.validate();

        if let Some(id) = self.globals.default_profile
            && self.find_profile(&id).is_none()
        {
            warnings.push(format!("default_profile {id} does not match any profile"));
        }

        for profile in self.profiles.profiles_ordered() {
            warnings.extend(profile.validate(self.allow_all_env_vars));
            if let Some(name) = profile.color_scheme_name()
                && !self.schemes.contains(name)
            {
                warnings.push(format!(
                    "Profile '{}' references unknown color scheme '{}'",
                    profile.name, name
                ));
            }
        }

        warnings
    }

    pub(crate) fn to_document(&self) -> SettingsDocument {
        let builtin = ColorSchemeRegistry::with_builtin();
        SettingsDocument {
            allow_all_env_vars: self.allow_all_env_vars,
            globals: self.globals.clone(),
            profiles: self.profiles.to_vec(),
            // Only schemes that differ from the built-in of the same name
            schemes: self
                .schemes
                .iter()
                .filter(|s| builtin.try_lookup(&s.name) != Some(*s))
                .cloned()
                .collect(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        let profile = Profile::with_id(DEFAULT_PROFILE_ID, crate::defaults::profile_name())
            .color_scheme("Campbell");
        Self::new(
            GlobalSettings::default().with_default_profile(DEFAULT_PROFILE_ID),
            vec![profile],
            Vec::new(),
        )
    }
}

/// Parse a profile GUID, accepting the `{...}` braced form.
pub fn parse_profile_id(value: &str) -> Option<ProfileId> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);
    Uuid::parse_str(inner).ok()
}

/// On-disk shape of a settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SettingsDocument {
    /// Read by the pre-scan before substitution and carried into
    /// [`AppSettings::allow_all_env_vars`] for path expansion
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_all_env_vars: bool,

    #[serde(default)]
    pub globals: GlobalSettings,

    #[serde(default)]
    pub profiles: Vec<Profile>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<ColorScheme>,
}

impl From<SettingsDocument> for AppSettings {
    fn from(doc: SettingsDocument) -> Self {
        AppSettings::new(doc.globals, doc.profiles, doc.schemes)
            .with_allow_all_env_vars(doc.allow_all_env_vars)
    }
}

impl SettingsDocument {
    /// Give every profile loaded without a GUID one derived from its name
    pub fn assign_missing_ids(&mut self) {
        for profile in self.profiles.iter_mut().filter(|p| p.guid.is_nil()) {
            profile.guid = Profile::generated_id(&profile.name);
            log::debug!(
                "Profile '{}' has no guid, using generated {}",
                profile.name,
                profile.guid
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> ProfileId {
        Uuid::from_u128(n)
    }

    fn sample() -> AppSettings {
        AppSettings::new(
            GlobalSettings::default(),
            vec![
                Profile::with_id(id(1), "Hidden").hidden(true),
                Profile::with_id(id(2), "Bash").order(1),
                Profile::with_id(id(3), "Zsh").order(2),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_parse_profile_id_forms() {
        let plain = "2c4de342-38b7-51cf-b940-2309a097f518";
        let braced = "{2c4de342-38b7-51cf-b940-2309a097f518}";
        assert!(parse_profile_id(plain).is_some());
        assert_eq!(parse_profile_id(plain), parse_profile_id(braced));
        assert!(parse_profile_id("Ubuntu").is_none());
        assert!(parse_profile_id("{not-a-guid}").is_none());
    }

    #[test]
    fn test_profile_for_args_by_name_and_guid() {
        let settings = sample();

        let by_name = NewTerminalArgs::new().profile("Zsh");
        assert_eq!(settings.profile_for_args(Some(&by_name)), Some(id(3)));

        let by_guid = NewTerminalArgs::new().profile(id(2).to_string());
        assert_eq!(settings.profile_for_args(Some(&by_guid)), Some(id(2)));

        let unknown_name = NewTerminalArgs::new().profile("fish");
        assert_eq!(settings.profile_for_args(Some(&unknown_name)), None);
    }

    #[test]
    fn test_unknown_guid_is_returned_unchecked() {
        let settings = sample();
        let args = NewTerminalArgs::new().profile(id(99).to_string());
        assert_eq!(settings.profile_for_args(Some(&args)), Some(id(99)));
        assert!(settings.find_profile(&id(99)).is_none());
    }

    #[test]
    fn test_profile_for_args_default() {
        let mut settings = sample();
        assert_eq!(settings.profile_for_args(None), Some(id(2)));

        // An empty profile request also falls back to the default
        let empty = NewTerminalArgs::new().profile("");
        assert_eq!(settings.profile_for_args(Some(&empty)), Some(id(2)));

        settings.globals.default_profile = Some(id(3));
        assert_eq!(settings.profile_for_args(None), Some(id(3)));
    }

    #[test]
    fn test_user_scheme_shadows_builtin() {
        let mut custom = ColorScheme::campbell();
        custom.foreground = crate::themes::Color::new(1, 1, 1);
        let settings = AppSettings::new(GlobalSettings::default(), Vec::new(), vec![custom.clone()]);

        assert_eq!(settings.schemes.try_lookup("Campbell"), Some(&custom));
        assert_eq!(settings.to_document().schemes, vec![custom]);
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = AppSettings::default();
        assert_eq!(settings.profiles.len(), 1);
        assert_eq!(settings.profile_for_args(None), Some(DEFAULT_PROFILE_ID));
        assert!(settings.validate().is_empty(), "{:?}", settings.validate());
    }

    #[test]
    fn test_validate_reports_dangling_references() {
        let mut settings = sample();
        settings.globals.default_profile = Some(id(42));
        settings
            .profiles
            .add(Profile::with_id(id(5), "Typo").color_scheme("Campbel"));

        let warnings = settings.validate();
        assert!(warnings.iter().any(|w| w.contains("default_profile")));
        assert!(warnings.iter().any(|w| w.contains("'Campbel'")));
    }
}
