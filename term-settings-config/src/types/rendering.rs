//! Rendering-related configuration types: background image placement.

use serde::{Deserialize, Serialize};

/// How a background image is scaled into the terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StretchMode {
    /// Original size, no scaling
    None,
    /// Stretch to fill exactly (ignores aspect ratio)
    Fill,
    /// Scale to fit while keeping aspect ratio (may letterbox)
    Uniform,
    /// Scale to fill while keeping aspect ratio (may crop)
    #[default]
    UniformToFill,
}

impl StretchMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            StretchMode::None => "None",
            StretchMode::Fill => "Fill",
            StretchMode::Uniform => "Uniform",
            StretchMode::UniformToFill => "Uniform to Fill",
        }
    }
}

/// Horizontal anchor of a background image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor of a background image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Both alignment axes of a background image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackgroundImageAlignment {
    #[serde(default)]
    pub horizontal: HorizontalAlignment,
    #[serde(default)]
    pub vertical: VerticalAlignment,
}

impl BackgroundImageAlignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}
