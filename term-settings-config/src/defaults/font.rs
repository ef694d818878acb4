//! Default values for the font descriptor.

use crate::types::FontWeight;

pub fn font_face() -> String {
    "Cascadia Mono".to_string()
}

pub fn font_size() -> f32 {
    12.0
}

pub fn font_weight() -> FontWeight {
    FontWeight::NORMAL
}
