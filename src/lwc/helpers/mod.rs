mod color;

pub use color::{ContrastColors, generate_contrast_colors, rgb_to_grayscale};
