//! Settings model.
//!
//! Re-exports all settings types from the `term-settings-config` crate.
//! Profiles, schemes, globals, launch arguments, defaults and persistence are
//! defined there.

pub use term_settings_config::*;
