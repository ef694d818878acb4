//! Layered settings resolution for terminal sessions.
//!
//! A [`TerminalSettings`] snapshot is composed from a profile, the color
//! scheme it names, the profile's own colors, global settings and per-launch
//! overrides, in that precedence order. The settings model itself lives in
//! the `term-settings-config` crate and is re-exported as [`config`].

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod color_table;
pub mod composer;
pub mod config;
pub mod debug;
pub mod error;
pub mod layer;
pub mod profile_resolver;
pub mod scheme_applier;
pub mod terminal_settings;

pub use color_table::ColorTable;
pub use composer::SettingsComposer;
pub use error::SettingsError;
pub use layer::{LayerKind, LayerStack, SettingsLayer, SettingsPatch};
pub use profile_resolver::ProfileResolver;
pub use scheme_applier::ColorSchemeApplier;
pub use terminal_settings::TerminalSettings;
