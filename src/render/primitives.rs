use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string so option documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Parses a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)`, `white`, `black` or `transparent`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        input.parse()
    }

    /// Returns the color channels quantized to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported css color `{input}`"))
}

fn parse_hex_color(hex: &str, input: &str) -> ChartResult<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid_color(input));
    }

    let bytes: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .filter_map(|ch| ch.to_digit(16))
            .map(|digit| (digit * 17) as u8)
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|start| u8::from_str_radix(&hex[start..start + 2], 16))
            .collect::<Result<_, _>>()
            .map_err(|_| invalid_color(input))?,
        _ => return Err(invalid_color(input)),
    };

    let color = Color::from_rgb8(bytes[0], bytes[1], bytes[2]);
    Ok(match bytes.get(3) {
        Some(alpha) => color.with_alpha(f64::from(*alpha) / 255.0),
        None => color,
    })
}

fn parse_rgb_function(body: &str, input: &str) -> ChartResult<Color> {
    let parts = body
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid_color(input))?;

    let (channels, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], 1.0),
        [r, g, b, a] => ([*r, *g, *b], *a),
        _ => return Err(invalid_color(input)),
    };

    let color = Color::rgba(
        channels[0] / 255.0,
        channels[1] / 255.0,
        channels[2] / 255.0,
        alpha,
    );
    color.validate().map_err(|_| invalid_color(input))?;
    Ok(color)
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex_color(hex, input);
        }

        let body = normalized
            .strip_prefix("rgba(")
            .or_else(|| normalized.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));
        match body {
            Some(body) => parse_rgb_function(body, input),
            None => Err(invalid_color(input)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.to_rgb8();
        if self.alpha >= 1.0 {
            write!(f, "#{red:02x}{green:02x}{blue:02x}")
        } else {
            write!(f, "rgba({red}, {green}, {blue}, {})", self.alpha)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Dash style of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

impl LineStyle {
    /// Dash segments (on, off) for a line of `line_width` pixels.
    ///
    /// Empty for solid lines.
    #[must_use]
    pub fn dash_pattern(self, line_width: f64) -> SmallVec<[f64; 2]> {
        match self {
            Self::Solid => SmallVec::new(),
            Self::Dotted => smallvec![line_width, line_width],
            Self::Dashed => smallvec![2.0 * line_width, 2.0 * line_width],
            Self::LargeDashed => smallvec![6.0 * line_width, 6.0 * line_width],
            Self::SparseDotted => smallvec![line_width, 4.0 * line_width],
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub stroke_style: LineStyle,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            stroke_style: LineStyle::Solid,
            color,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Deterministic, backend-independent estimate of a label's rendered width.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | '\'' => 0.34,
            '-' | '+' | '%' | '\u{2212}' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::{Color, LineStyle};

    #[test]
    fn short_and_long_hex_forms_are_equal() {
        assert_eq!(
            Color::parse("#f00").expect("short"),
            Color::parse("#ff0000").expect("long")
        );
        assert_eq!(
            Color::parse("#0f0").expect("short"),
            Color::from_rgb8(0, 255, 0)
        );
    }

    #[test]
    fn rgba_function_keeps_alpha() {
        let color = Color::parse("rgba(38, 166, 154, 0.5)").expect("rgba");
        assert_eq!(color.to_rgb8(), (38, 166, 154));
        assert!((color.alpha - 0.5).abs() <= 1e-12);
        assert_eq!(color.to_string(), "rgba(38, 166, 154, 0.5)");
    }

    #[test]
    fn opaque_colors_display_as_hex() {
        let color = Color::parse("rgb(76, 82, 94)").expect("rgb");
        assert_eq!(color.to_string(), "#4c525e");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for input in ["", "#12", "#gggggg", "rgb(1, 2)", "rgba(1, 2, 3, 4)"] {
            assert!(Color::parse(input).is_err(), "{input} should be rejected");
        }
        assert!(Color::parse("teal").is_err());
    }

    #[test]
    fn dash_patterns_scale_with_width() {
        assert!(LineStyle::Solid.dash_pattern(2.0).is_empty());
        assert_eq!(
            LineStyle::LargeDashed.dash_pattern(1.0).as_slice(),
            &[6.0, 6.0]
        );
        assert_eq!(
            LineStyle::SparseDotted.dash_pattern(2.0).as_slice(),
            &[2.0, 8.0]
        );
    }
}
