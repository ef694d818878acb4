//! Typed error types for the settings resolution engine.
//!
//! Callers at the crate boundary can match on specific variants instead of
//! relying on opaque `anyhow` strings. The binary wraps these in `anyhow`.

use thiserror::Error;

/// Errors produced while composing a settings snapshot or touching its palette.
///
/// Both variants are caller mistakes (an argument that names nothing, or an
/// index outside the palette); see [`SettingsError::is_invalid_argument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No profile matched the requested GUID or name.
    #[error("Profile not found: '{requested}'")]
    ProfileNotFound {
        /// The identifier that was requested (GUID, name, or the default id).
        requested: String,
    },

    /// A color table index was outside `0..16`.
    #[error("Color table index {index} is out of range (expected 0..16)")]
    ColorIndexOutOfRange {
        /// The rejected index.
        index: i32,
    },
}

impl SettingsError {
    /// Whether the error is an invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            SettingsError::ProfileNotFound { .. } | SettingsError::ColorIndexOutOfRange { .. } => {
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SettingsError::ProfileNotFound {
            requested: "fish".to_string(),
        };
        assert_eq!(err.to_string(), "Profile not found: 'fish'");
        assert!(err.is_invalid_argument());

        let err = SettingsError::ColorIndexOutOfRange { index: 16 };
        assert!(err.to_string().contains("16"));
        assert!(err.is_invalid_argument());
    }
}
