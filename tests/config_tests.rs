mod common;

use common::*;
use term_settings::config::{AppSettings, ConfigError, DEFAULT_PROFILE_ID, NewTerminalArgs};
use term_settings::SettingsComposer;

const DOCUMENT: &str = r##"
globals:
  initial_cols: 132
  default_profile: "{00000000-0000-0000-0000-0000000000a1}"
profiles:
  - guid: 00000000-0000-0000-0000-0000000000a1
    name: Work
    commandline: zsh
    color_scheme: Paper
    foreground: "#000000"
  - guid: 00000000-0000-0000-0000-0000000000b2
    name: Ops
    commandline: ssh ops
schemes:
  - name: Paper
    foreground: "#333333"
    background: "#FAFAFA"
    selection_background: "#DDDDDD"
    cursor_color: "#222222"
    table: ["#000000", "#AA0000", "#00AA00", "#AAAA00", "#0000AA", "#AA00AA", "#00AAAA", "#AAAAAA",
            "#555555", "#FF5555", "#55FF55", "#FFFF55", "#5555FF", "#FF55FF", "#55FFFF", "#FFFFFF"]
"##;

#[test]
fn test_document_feeds_composer() {
    let app = AppSettings::from_yaml_str(DOCUMENT).expect("parse");
    let (id, settings) = SettingsComposer::build_settings(&app, None).expect("composed");

    assert_eq!(id, ALPHA_ID);
    assert_eq!(settings.profile_name, "Work");
    assert_eq!(settings.initial_cols, 132);
    assert_eq!(settings.default_foreground, 0x000000);
    assert_eq!(settings.default_background, 0xFAFAFA);
    assert_eq!(settings.get_color_table_entry(9), Ok(0xFF5555));
}

#[test]
fn test_document_profile_by_name() {
    let app = AppSettings::from_yaml_str(DOCUMENT).expect("parse");
    let args = NewTerminalArgs::new().profile("ops");
    let (id, settings) = SettingsComposer::build_settings(&app, Some(&args)).expect("composed");
    assert_eq!(id, BETA_ID);
    assert_eq!(settings.commandline, "ssh ops");
}

#[test]
fn test_save_load_then_compose_is_stable() {
    let (path, _temp_dir) = settings_path_in_tmp_dir();
    let app = sample_settings();
    app.save_to(&path).expect("save");

    let loaded = AppSettings::load_from(&path).expect("load");
    assert_eq!(loaded, app);

    for id in [ALPHA_ID, BETA_ID, BASH_ID, THEMED_ID, BROKEN_SCHEME_ID] {
        assert_eq!(
            SettingsComposer::for_profile(&loaded, &id).expect("composed"),
            SettingsComposer::for_profile(&app, &id).expect("composed")
        );
    }
}

#[test]
fn test_malformed_palette_is_rejected() {
    let yaml = DOCUMENT.replace(r##""#555555", "##, "");
    let err = AppSettings::from_yaml_str(&yaml).expect_err("15 entries");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_default_settings_compose() {
    let app = AppSettings::default();
    let (id, settings) = SettingsComposer::build_settings(&app, None).expect("composed");
    assert_eq!(id, DEFAULT_PROFILE_ID);
    assert_eq!(settings.profile_name, "Default");
    assert_eq!(settings.starting_title, "Default");
}

#[test]
fn test_env_substitution_in_document() {
    let yaml = r#"
profiles:
  - name: Env
    commandline: "${TERM_SETTINGS_TEST_UNSET_SHELL:-/bin/bash}"
"#;
    let app = AppSettings::from_yaml_str(yaml).expect("parse");
    let (_, settings) = SettingsComposer::build_settings(&app, None).expect("composed");
    assert_eq!(settings.commandline, "/bin/bash");
}

#[test]
fn test_profile_paths_keep_non_allowlisted_vars() {
    // SAFETY: `set_var` is `unsafe` in Rust 2024 because it races with other
    // threads reading the environment. The variable name is unique to this test.
    unsafe {
        std::env::set_var("DOCUMENT_SECRET_FOR_TERM_SETTINGS_TEST", "hunter2");
    }
    let yaml = r#"
profiles:
  - name: Secret
    starting_directory: /home/${DOCUMENT_SECRET_FOR_TERM_SETTINGS_TEST}
    background_image: /img/%DOCUMENT_SECRET_FOR_TERM_SETTINGS_TEST%.png
"#;
    let app = AppSettings::from_yaml_str(yaml).expect("parse");
    let (_, settings) = SettingsComposer::build_settings(&app, None).expect("composed");
    assert_eq!(
        settings.starting_directory.as_deref(),
        Some("/home/${DOCUMENT_SECRET_FOR_TERM_SETTINGS_TEST}")
    );
    assert_eq!(
        settings.background_image.as_deref(),
        Some("/img/%DOCUMENT_SECRET_FOR_TERM_SETTINGS_TEST%.png")
    );

    let opted_in = format!("allow_all_env_vars: true\n{yaml}");
    let app = AppSettings::from_yaml_str(&opted_in).expect("parse");
    let (_, settings) = SettingsComposer::build_settings(&app, None).expect("composed");
    assert_eq!(settings.starting_directory.as_deref(), Some("/home/hunter2"));
    assert_eq!(settings.background_image.as_deref(), Some("/img/hunter2.png"));
}
