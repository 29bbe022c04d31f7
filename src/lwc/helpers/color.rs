use crate::render::Color;

const RED_GRAYSCALE_WEIGHT: f64 = 0.199;
const GREEN_GRAYSCALE_WEIGHT: f64 = 0.687;
const BLUE_GRAYSCALE_WEIGHT: f64 = 0.114;

/// Backgrounds brighter than this get black text.
const LIGHT_BACKGROUND_THRESHOLD: f64 = 160.0;

/// Label background plus a foreground readable on top of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastColors {
    pub background: Color,
    pub foreground: Color,
}

/// Perceived brightness in `0..=255`, ignoring alpha.
#[must_use]
pub fn rgb_to_grayscale(color: Color) -> f64 {
    let (red, green, blue) = color.to_rgb8();
    RED_GRAYSCALE_WEIGHT * f64::from(red)
        + GREEN_GRAYSCALE_WEIGHT * f64::from(green)
        + BLUE_GRAYSCALE_WEIGHT * f64::from(blue)
}

#[must_use]
pub fn generate_contrast_colors(background: Color) -> ContrastColors {
    let foreground = if rgb_to_grayscale(background) > LIGHT_BACKGROUND_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    };
    ContrastColors {
        background,
        foreground,
    }
}
