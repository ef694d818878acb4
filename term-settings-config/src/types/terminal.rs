//! Terminal behavior configuration types: cursor, scrollbar, text antialiasing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Cursor Types
// ============================================================================

/// Cursor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CursorShape {
    /// Partial-height block whose size is taken from `cursor_height`
    Vintage,
    /// Vertical line at cell start
    #[default]
    Bar,
    /// Horizontal line at cell bottom
    Underscore,
    /// Two horizontal lines at cell bottom
    DoubleUnderscore,
    /// Block filling the entire cell
    FilledBox,
    /// Outline-only block
    EmptyBox,
}

impl CursorShape {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CursorShape::Vintage => "Vintage",
            CursorShape::Bar => "Bar",
            CursorShape::Underscore => "Underscore",
            CursorShape::DoubleUnderscore => "Double Underscore",
            CursorShape::FilledBox => "Filled Box",
            CursorShape::EmptyBox => "Empty Box",
        }
    }

    /// All available shapes for UI iteration
    pub fn all() -> &'static [CursorShape] {
        &[
            CursorShape::Vintage,
            CursorShape::Bar,
            CursorShape::Underscore,
            CursorShape::DoubleUnderscore,
            CursorShape::FilledBox,
            CursorShape::EmptyBox,
        ]
    }
}

// ============================================================================
// Scrollbar / Text Rendering
// ============================================================================

/// Scrollbar visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollbarState {
    #[default]
    Visible,
    Hidden,
}

/// Text antialiasing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AntialiasingMode {
    #[default]
    Grayscale,
    /// Subpixel (LCD) antialiasing
    Cleartype,
    /// No antialiasing
    Aliased,
}

impl AntialiasingMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AntialiasingMode::Grayscale => "Grayscale",
            AntialiasingMode::Cleartype => "ClearType",
            AntialiasingMode::Aliased => "Aliased",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_shape_serde_names() {
        let yaml = serde_yaml_ng::to_string(&CursorShape::DoubleUnderscore).expect("serialize");
        assert_eq!(yaml.trim(), "double_underscore");

        let shape: CursorShape = serde_yaml_ng::from_str("filled_box").expect("deserialize");
        assert_eq!(shape, CursorShape::FilledBox);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CursorShape::default(), CursorShape::Bar);
        assert_eq!(ScrollbarState::default(), ScrollbarState::Visible);
        assert_eq!(AntialiasingMode::default(), AntialiasingMode::Grayscale);
    }

    #[test]
    fn test_cursor_shape_all_has_unique_names() {
        let mut names: Vec<_> = CursorShape::all().iter().map(|s| s.display_name()).collect();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
