//! Settings persistence and path resolution for `AppSettings`.
//!
//! Covers:
//! - `load` / `load_from` / `from_yaml_str` (YAML with `${VAR}` substitution)
//! - `save_to` (atomic write via temp file + rename)
//! - XDG-compliant path helpers (`config_dir`, `config_path`)

use super::app_settings::{AppSettings, SettingsDocument};
use super::env_vars;
use crate::error::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl AppSettings {
    /// Load settings from the default path, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Settings file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading settings from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a settings document.
    ///
    /// `${VAR}` references are substituted before parsing (allowlisted
    /// variables only, unless the document sets `allow_all_env_vars: true`).
    /// Non-fatal problems are logged as warnings.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let allow_all = env_vars::pre_scan_allow_all_env_vars(contents);
        let contents = env_vars::substitute_variables_with_allowlist(contents, allow_all);
        let mut doc: SettingsDocument =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;

        doc.assign_missing_ids();
        warn_duplicates(&doc);

        let settings = AppSettings::from(doc);
        for warning in settings.validate() {
            log::warn!("{warning}");
        }
        log::debug!(
            "Loaded {} profiles and {} color schemes",
            settings.profiles.len(),
            settings.schemes.len()
        );
        Ok(settings)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(&self.to_document()).map_err(ConfigError::from)?)
    }

    /// Save settings to a specific file.
    ///
    /// Refuses with [`ConfigError::Validation`] when `default_profile` names
    /// no profile, so a saved document always resolves its default.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(id) = self.globals.default_profile
            && self.find_profile(&id).is_none()
        {
            return Err(ConfigError::Validation(format!(
                "default_profile {id} does not match any profile"
            ))
            .into());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = self.to_yaml_string()?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the settings directory (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("term-settings")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/term-settings
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("term-settings")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.yaml")
    }
}

fn warn_duplicates(doc: &SettingsDocument) {
    let mut seen_ids = std::collections::HashSet::new();
    for profile in &doc.profiles {
        if !seen_ids.insert(profile.guid) {
            log::warn!(
                "Duplicate profile GUID {} ('{}'), the later entry wins",
                profile.guid,
                profile.name
            );
        }
    }

    let mut seen_names = std::collections::HashSet::new();
    for scheme in &doc.schemes {
        if !seen_names.insert(scheme.name.as_str()) {
            log::warn!(
                "Duplicate color scheme '{}', the later entry wins",
                scheme.name
            );
        }
    }
}
