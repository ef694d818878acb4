//! Baseline colors of a settings snapshot before any scheme or explicit color
//! is applied. These are the Campbell scheme values, packed as `0x00RRGGBB`.

use crate::themes::{ColorScheme, PALETTE_SIZE};

pub fn default_foreground() -> u32 {
    0xCCCCCC
}

pub fn default_background() -> u32 {
    0x0C0C0C
}

pub fn selection_background() -> u32 {
    0xFFFFFF
}

pub fn cursor_color() -> u32 {
    0xFFFFFF
}

pub fn color_table() -> [u32; PALETTE_SIZE] {
    ColorScheme::campbell().table.map(|c| c.to_packed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_matches_campbell() {
        let campbell = ColorScheme::campbell();
        assert_eq!(default_foreground(), campbell.foreground.to_packed());
        assert_eq!(default_background(), campbell.background.to_packed());
        assert_eq!(
            selection_background(),
            campbell.selection_background.to_packed()
        );
        assert_eq!(cursor_color(), campbell.cursor_color.to_packed());
        assert_eq!(color_table()[1], 0xC50F1F);
    }
}
