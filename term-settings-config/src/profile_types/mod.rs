//! Profile types and the profile registry.
//!
//! ## Sub-modules
//!
//! - [`profile`]: Core `Profile` struct and its builder/impl methods
//! - [`manager`]: `ProfileManager`, the GUID-keyed profile registry

pub mod manager;
pub mod profile;

pub use manager::ProfileManager;
pub use profile::{Profile, ProfileId};
