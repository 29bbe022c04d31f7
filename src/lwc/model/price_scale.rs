use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const MINUS_SIGN: char = '\u{2212}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceScaleMode {
    #[default]
    Normal,
    Logarithmic,
    Percentage,
    IndexedTo100,
}

/// Decimal layout used when turning prices into label text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormat {
    pub precision: u8,
    pub min_move: f64,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            min_move: 0.01,
        }
    }
}

impl PriceFormat {
    #[must_use]
    pub fn format(self, price: f64) -> String {
        format_with_precision(price, self.precision, self.min_move)
    }
}

fn format_with_precision(value: f64, precision: u8, min_move: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_owned();
    }
    let rounded = if min_move.is_finite() && min_move > 0.0 {
        (value / min_move).round() * min_move
    } else {
        value
    };
    let precision = usize::from(precision);
    let magnitude = format!("{:.precision$}", rounded.abs());
    let is_zero = magnitude.chars().all(|ch| ch == '0' || ch == '.');
    if rounded < 0.0 && !is_zero {
        format!("{MINUS_SIGN}{magnitude}")
    } else {
        magnitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceScaleOptions {
    pub mode: PriceScaleMode,
    pub price_format: PriceFormat,
}

impl Default for PriceScaleOptions {
    fn default() -> Self {
        Self {
            mode: PriceScaleMode::Normal,
            price_format: PriceFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min == self.max || self.min.is_nan() || self.max.is_nan()
    }
}

/// Vertical axis state consumed by price-axis views.
///
/// Coordinate transforms live with the host chart; this type only carries the
/// pieces label views read: data presence, the first plotted value, the label
/// font size and price formatting.
#[derive(Debug, Clone)]
pub struct PriceScale {
    id: String,
    options: PriceScaleOptions,
    font_size: f64,
    height: f64,
    price_range: Option<PriceRange>,
    first_value: Option<f64>,
}

impl PriceScale {
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    #[must_use]
    pub fn new(id: impl Into<String>, options: PriceScaleOptions) -> Self {
        Self {
            id: id.into(),
            options,
            font_size: Self::DEFAULT_FONT_SIZE,
            height: 0.0,
            price_range: None,
            first_value: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn options(&self) -> PriceScaleOptions {
        self.options
    }

    pub fn apply_options(&mut self, options: PriceScaleOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn mode(&self) -> PriceScaleMode {
        self.options.mode
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: f64) -> ChartResult<()> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "price scale font size must be finite and > 0".to_owned(),
            ));
        }
        self.font_size = font_size;
        Ok(())
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = if height.is_finite() {
            height.max(0.0)
        } else {
            0.0
        };
    }

    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    /// A scale is empty when it has no height or no non-degenerate price range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height == 0.0 || self.price_range.is_none_or(PriceRange::is_empty)
    }

    /// First plotted value of the scale's main source, the reference for
    /// percentage and indexed modes.
    #[must_use]
    pub fn first_value(&self) -> Option<f64> {
        self.first_value
    }

    pub fn set_first_value(&mut self, first_value: Option<f64>) {
        self.first_value = first_value.filter(|value| value.is_finite());
    }

    /// Formats `price` for display, relative to `first_value` in percentage
    /// and indexed modes.
    #[must_use]
    pub fn format_price(&self, price: f64, first_value: f64) -> String {
        let format = self.options.price_format;
        match self.options.mode {
            PriceScaleMode::Normal | PriceScaleMode::Logarithmic => format.format(price),
            PriceScaleMode::Percentage => {
                let mut text = format_with_precision(to_percent(price, first_value), 2, 0.01);
                text.push('%');
                text
            }
            PriceScaleMode::IndexedTo100 => {
                format_with_precision(to_indexed_to_100(price, first_value), 2, 0.01)
            }
        }
    }
}

fn to_percent(value: f64, base_value: f64) -> f64 {
    let result = 100.0 * (value - base_value) / base_value;
    if base_value < 0.0 { -result } else { result }
}

fn to_indexed_to_100(value: f64, base_value: f64) -> f64 {
    let result = 100.0 * (value - base_value) / base_value + 100.0;
    if base_value < 0.0 { -result } else { result }
}

#[cfg(test)]
mod tests {
    use super::{PriceFormat, PriceRange, PriceScale, PriceScaleMode, PriceScaleOptions};

    fn scale(mode: PriceScaleMode) -> PriceScale {
        PriceScale::new(
            "right",
            PriceScaleOptions {
                mode,
                ..PriceScaleOptions::default()
            },
        )
    }

    #[test]
    fn empty_until_height_and_range_exist() {
        let mut scale = scale(PriceScaleMode::Normal);
        assert!(scale.is_empty());
        scale.set_height(300.0);
        assert!(scale.is_empty());
        scale.set_price_range(Some(PriceRange::new(5.0, 5.0)));
        assert!(scale.is_empty());
        scale.set_price_range(Some(PriceRange::new(5.0, 10.0)));
        assert!(!scale.is_empty());
    }

    #[test]
    fn normal_mode_uses_price_format_precision() {
        let scale = scale(PriceScaleMode::Normal);
        assert_eq!(scale.format_price(123.456, 100.0), "123.46");
        assert_eq!(scale.format_price(-0.5, 100.0), "\u{2212}0.50");
        assert_eq!(scale.format_price(-0.001, 100.0), "0.00");
    }

    #[test]
    fn min_move_rounds_before_formatting() {
        let format = PriceFormat {
            precision: 2,
            min_move: 0.25,
        };
        assert_eq!(format.format(10.1), "10.00");
        assert_eq!(format.format(10.2), "10.25");
    }

    #[test]
    fn percentage_mode_is_relative_to_first_value() {
        let scale = scale(PriceScaleMode::Percentage);
        assert_eq!(scale.format_price(110.0, 100.0), "10.00%");
        assert_eq!(scale.format_price(90.0, 100.0), "\u{2212}10.00%");
    }

    #[test]
    fn indexed_mode_starts_at_one_hundred() {
        let scale = scale(PriceScaleMode::IndexedTo100);
        assert_eq!(scale.format_price(150.0, 100.0), "150.00");
    }

    #[test]
    fn non_finite_first_value_is_dropped() {
        let mut scale = scale(PriceScaleMode::Normal);
        scale.set_first_value(Some(f64::NAN));
        assert!(scale.first_value().is_none());
    }
}
