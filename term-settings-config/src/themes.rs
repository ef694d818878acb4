//! Color and color-scheme definitions.
//!
//! A [`ColorScheme`] carries the four distinguished colors (foreground,
//! background, selection background, cursor) and a 16-entry ANSI palette.
//! Built-in schemes are constructed here and seeded into the
//! [`ColorSchemeRegistry`](crate::ColorSchemeRegistry).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of entries in an ANSI palette.
pub const PALETTE_SIZE: usize = 16;

/// A color in RGB format.
///
/// Serialized as a `#RRGGBB` hex string. Converts loss-free to and from the
/// packed `0x00RRGGBB` form via [`Color::to_packed`] / [`Color::from_packed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal. Bits above 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into `0x00RRGGBB`.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse `#RRGGBB` or the short `#RGB` form. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{s}': expected #RRGGBB"));
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .map(Color::from_packed)
                .map_err(|e| format!("invalid color '{s}': {e}")),
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    // to_digit cannot fail: checked is_ascii_hexdigit above
                    let nibble = c.to_digit(16).unwrap_or(0) as u8;
                    *slot = nibble * 17;
                }
                Ok(Color::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(format!("invalid color '{s}': expected #RRGGBB")),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// A named terminal color scheme: 16 ANSI colors plus four distinguished colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub selection_background: Color,
    pub cursor_color: Color,

    /// ANSI colors 0-15: black, red, green, yellow, blue, purple, cyan, white,
    /// then the bright variants in the same order.
    pub table: [Color; PALETTE_SIZE],
}

impl ColorScheme {
    fn from_hex(
        name: &str,
        foreground: u32,
        background: u32,
        selection_background: u32,
        cursor_color: u32,
        table: [u32; PALETTE_SIZE],
    ) -> Self {
        Self {
            name: name.to_string(),
            foreground: Color::from_packed(foreground),
            background: Color::from_packed(background),
            selection_background: Color::from_packed(selection_background),
            cursor_color: Color::from_packed(cursor_color),
            table: table.map(Color::from_packed),
        }
    }

    /// Campbell, also the baseline palette of a fresh settings snapshot
    pub fn campbell() -> Self {
        Self::from_hex(
            "Campbell",
            0xCCCCCC,
            0x0C0C0C,
            0xFFFFFF,
            0xFFFFFF,
            CAMPBELL_TABLE,
        )
    }

    /// Campbell Powershell
    pub fn campbell_powershell() -> Self {
        Self::from_hex(
            "Campbell Powershell",
            0xCCCCCC,
            0x012456,
            0xFFFFFF,
            0xFFFFFF,
            CAMPBELL_TABLE,
        )
    }

    /// One Half Dark
    pub fn one_half_dark() -> Self {
        Self::from_hex(
            "One Half Dark",
            0xDCDFE4,
            0x282C34,
            0xFFFFFF,
            0xFFFFFF,
            [
                0x282C34, 0xE06C75, 0x98C379, 0xE5C07B, 0x61AFEF, 0xC678DD, 0x56B6C2, 0xDCDFE4,
                0x5A6374, 0xE06C75, 0x98C379, 0xE5C07B, 0x61AFEF, 0xC678DD, 0x56B6C2, 0xDCDFE4,
            ],
        )
    }

    /// One Half Light
    pub fn one_half_light() -> Self {
        Self::from_hex(
            "One Half Light",
            0x383A42,
            0xFAFAFA,
            0xFFFFFF,
            0x4F525D,
            [
                0x383A42, 0xE45649, 0x50A14F, 0xC18301, 0x0184BC, 0xA626A4, 0x0997B3, 0xFAFAFA,
                0x4F525D, 0xDF6C75, 0x98C379, 0xE4C07A, 0x61AFEF, 0xC577DD, 0x56B5C1, 0xFFFFFF,
            ],
        )
    }

    /// Tango Dark
    pub fn tango_dark() -> Self {
        Self::from_hex(
            "Tango Dark",
            0xD3D7CF,
            0x000000,
            0xFFFFFF,
            0xFFFFFF,
            TANGO_TABLE,
        )
    }

    /// Tango Light
    pub fn tango_light() -> Self {
        Self::from_hex(
            "Tango Light",
            0x555753,
            0xFFFFFF,
            0xFFFFFF,
            0x000000,
            TANGO_TABLE,
        )
    }

    /// Vintage (classic 16-color console)
    pub fn vintage() -> Self {
        Self::from_hex(
            "Vintage",
            0xC0C0C0,
            0x000000,
            0xFFFFFF,
            0xFFFFFF,
            [
                0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0xC0C0C0,
                0x808080, 0xFF0000, 0x00FF00, 0xFFFF00, 0x0000FF, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
            ],
        )
    }

    /// Dracula
    pub fn dracula() -> Self {
        Self::from_hex(
            "Dracula",
            0xF8F8F2,
            0x282A36,
            0x44475A,
            0xF8F8F0,
            [
                0x000000, 0xFF5555, 0x50FA7B, 0xF1FA8C, 0xBD93F9, 0xFF79C6, 0x8BE9FD, 0xFFFFFF,
                0x6272A4, 0xFF6E67, 0x5AF78E, 0xF4F4A1, 0xBD93F9, 0xFF79C6, 0x8BE9FD, 0xFFFFFF,
            ],
        )
    }

    /// Nord
    pub fn nord() -> Self {
        Self::from_hex(
            "Nord",
            0xD8DEE9,
            0x2E3440,
            0x3B4252,
            0xD8DEE9,
            [
                0x3B4252, 0xBF616A, 0xA3BE8C, 0xEBCB8B, 0x81A1C1, 0xB48EAD, 0x88C0D0, 0xE5E9F0,
                0x4C566A, 0xBF616A, 0xA3BE8C, 0xEBCB8B, 0x81A1C1, 0xB48EAD, 0x8FBCBB, 0xECEFF4,
            ],
        )
    }

    /// Solarized Dark
    pub fn solarized_dark() -> Self {
        Self::from_hex(
            "Solarized Dark",
            0x839496,
            0x002B36,
            0x073642,
            0x93A1A1,
            [
                0x073642, 0xDC322F, 0x859900, 0xB58900, 0x268BD2, 0xD33682, 0x2AA198, 0xEEE8D5,
                0x002B36, 0xCB4B16, 0x586E75, 0x657B83, 0x839496, 0x6C71C4, 0x93A1A1, 0xFDF6E3,
            ],
        )
    }

    /// Solarized Light
    pub fn solarized_light() -> Self {
        Self::from_hex(
            "Solarized Light",
            0x657B83,
            0xFDF6E3,
            0xEEE8D5,
            0x586E75,
            [
                0xEEE8D5, 0xDC322F, 0x859900, 0xB58900, 0x268BD2, 0xD33682, 0x2AA198, 0x073642,
                0xFDF6E3, 0xCB4B16, 0x93A1A1, 0x839496, 0x657B83, 0x6C71C4, 0x586E75, 0x002B36,
            ],
        )
    }

    /// All built-in schemes, in the order they are seeded into a registry
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::campbell(),
            Self::campbell_powershell(),
            Self::one_half_dark(),
            Self::one_half_light(),
            Self::tango_dark(),
            Self::tango_light(),
            Self::vintage(),
            Self::dracula(),
            Self::nord(),
            Self::solarized_dark(),
            Self::solarized_light(),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::campbell()
    }
}

const CAMPBELL_TABLE: [u32; PALETTE_SIZE] = [
    0x0C0C0C, 0xC50F1F, 0x13A10E, 0xC19C00, 0x0037DA, 0x881798, 0x3A96DD, 0xCCCCCC, 0x767676,
    0xE74856, 0x16C60C, 0xF9F1A5, 0x3B78FF, 0xB4009E, 0x61D6D6, 0xF2F2F2,
];

const TANGO_TABLE: [u32; PALETTE_SIZE] = [
    0x000000, 0xCC0000, 0x4E9A06, 0xC4A000, 0x3465A4, 0x75507B, 0x06989A, 0xD3D7CF, 0x555753,
    0xEF2929, 0x8AE234, 0xFCE94F, 0x729FCF, 0xAD7FA8, 0x34E2E2, 0xEEEEEC,
];
