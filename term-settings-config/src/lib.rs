//! Settings model for the term-settings terminal settings engine.
//!
//! This crate owns everything that is read from or written to the settings
//! document:
//!
//! - Profiles and the profile manager
//! - Color schemes and the built-in scheme registry
//! - Global settings and per-launch arguments
//! - Default values, YAML persistence and `${VAR}` substitution

pub mod config;
pub mod defaults;
pub mod error;
pub mod global;
pub mod launch;
pub mod profile_types;
pub mod schemes;
pub mod themes;
mod types;

// Re-export main types for convenience
pub use config::{
    AppSettings, DEFAULT_PROFILE_ID, expand_path, expand_path_with_allowlist, parse_profile_id,
    substitute_variables,
};
pub use error::ConfigError;
pub use global::GlobalSettings;
pub use launch::NewTerminalArgs;
pub use profile_types::{Profile, ProfileId, ProfileManager};
pub use schemes::ColorSchemeRegistry;
pub use themes::{Color, ColorScheme, PALETTE_SIZE};

// Re-export enum settings types
pub use types::{
    AntialiasingMode, BackgroundImageAlignment, CursorShape, FontWeight, HorizontalAlignment,
    ScrollbarState, StretchMode, VerticalAlignment,
};
