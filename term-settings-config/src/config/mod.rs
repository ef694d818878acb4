//! Settings document management.
//!
//! # Sub-modules
//!
//! - [`app_settings`]: The `AppSettings` aggregate and profile selection
//! - [`persistence`]: `impl AppSettings` methods for load/save/path-resolution
//! - [`env_vars`]: Environment-variable allowlist, `${VAR}` substitution and path expansion

pub mod app_settings;
pub mod env_vars;
pub mod persistence;

pub use app_settings::{AppSettings, DEFAULT_PROFILE_ID, parse_profile_id};
pub use env_vars::{
    ALLOWED_ENV_VARS, expand_path, expand_path_with_allowlist, is_env_var_allowed,
    substitute_variables, substitute_variables_with_allowlist,
};
