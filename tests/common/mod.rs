//! Shared integration test helpers for term-settings.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{sample_settings, BASH_ID};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use term_settings::config::{AppSettings, Color, ColorScheme, GlobalSettings, Profile, ProfileId};
use uuid::Uuid;

pub const ALPHA_ID: ProfileId = Uuid::from_u128(0xA1);
pub const BETA_ID: ProfileId = Uuid::from_u128(0xB2);
pub const BASH_ID: ProfileId = Uuid::from_u128(0xBA5);
pub const THEMED_ID: ProfileId = Uuid::from_u128(0x7E);
pub const BROKEN_SCHEME_ID: ProfileId = Uuid::from_u128(0xBAD);

/// A user-defined scheme with recognisable values in every slot
pub fn custom_scheme() -> ColorScheme {
    ColorScheme {
        name: "Custom".to_string(),
        foreground: Color::from_packed(0x111111),
        background: Color::from_packed(0x222222),
        selection_background: Color::from_packed(0x333333),
        cursor_color: Color::from_packed(0x444444),
        table: std::array::from_fn(|i| Color::from_packed(0x010000 * (i as u32 + 1))),
    }
}

/// Settings with a handful of profiles covering the composition paths:
///
/// - `Alpha`: no scheme, no explicit colors, no tab title (the default)
/// - `Beta`: tab title "Custom"
/// - `Bash`: commandline "bash" and a starting directory
/// - `Themed`: the `Custom` scheme plus an explicit cursor color
/// - `Broken`: names a scheme that does not exist
pub fn sample_settings() -> AppSettings {
    let globals = GlobalSettings {
        copy_on_select: true,
        word_delimiters: " ,".to_string(),
        ..GlobalSettings::default()
    }
    .with_dimensions(100, 40)
    .with_default_profile(ALPHA_ID);

    AppSettings::new(
        globals,
        vec![
            Profile::with_id(ALPHA_ID, "Alpha").order(0),
            Profile::with_id(BETA_ID, "Beta").order(1).tab_title("Custom"),
            Profile::with_id(BASH_ID, "Bash")
                .order(2)
                .commandline("bash")
                .starting_directory("/srv/bash"),
            Profile::with_id(THEMED_ID, "Themed")
                .order(3)
                .color_scheme("Custom")
                .cursor_color(Color::from_packed(0xFF00FF))
                .tab_color(Color::from_packed(0x00FF00)),
            Profile::with_id(BROKEN_SCHEME_ID, "Broken")
                .order(4)
                .color_scheme("Does Not Exist"),
        ],
        vec![custom_scheme()],
    )
}

/// Creates a temporary directory and the path of a settings file inside it.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn settings_path_in_tmp_dir() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.yaml");
    (path, temp_dir)
}
