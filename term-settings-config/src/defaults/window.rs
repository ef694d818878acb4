//! Default values for window geometry and visual-appearance settings.

pub fn cols() -> i32 {
    120
}

pub fn rows() -> i32 {
    30
}

pub fn padding() -> String {
    "8, 8, 8, 8".to_string() // left, top, right, bottom
}

pub fn acrylic_opacity() -> f64 {
    0.5
}

pub fn background_image_opacity() -> f64 {
    1.0 // Fully opaque by default
}
