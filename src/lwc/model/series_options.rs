use serde::{Deserialize, Serialize};

use crate::render::{Color, LineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesType {
    Bar,
    Candlestick,
    Area,
    Baseline,
    Line,
    Histogram,
}

impl SeriesType {
    pub const ALL: [Self; 6] = [
        Self::Bar,
        Self::Candlestick,
        Self::Area,
        Self::Baseline,
        Self::Line,
        Self::Histogram,
    ];
}

fn teal() -> Color {
    Color::from_rgb8(38, 166, 154)
}

fn red() -> Color {
    Color::from_rgb8(239, 83, 80)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyleOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub open_visible: bool,
    pub thin_bars: bool,
}

impl Default for BarStyleOptions {
    fn default() -> Self {
        Self {
            up_color: teal(),
            down_color: red(),
            open_visible: true,
            thin_bars: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickStyleOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub wick_visible: bool,
    pub border_visible: bool,
    pub border_up_color: Color,
    pub border_down_color: Color,
    pub wick_up_color: Color,
    pub wick_down_color: Color,
}

impl Default for CandlestickStyleOptions {
    fn default() -> Self {
        Self {
            up_color: teal(),
            down_color: red(),
            wick_visible: true,
            border_visible: true,
            border_up_color: teal(),
            border_down_color: red(),
            wick_up_color: teal(),
            wick_down_color: red(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaStyleOptions {
    pub top_color: Color,
    pub bottom_color: Color,
    pub invert_filled_area: bool,
    pub line_color: Color,
    pub line_style: LineStyle,
    pub line_width: f64,
}

impl Default for AreaStyleOptions {
    fn default() -> Self {
        Self {
            top_color: Color::from_rgb8(46, 220, 135).with_alpha(0.4),
            bottom_color: Color::from_rgb8(40, 221, 100).with_alpha(0.0),
            invert_filled_area: false,
            line_color: Color::from_rgb8(0x33, 0xd7, 0x78),
            line_style: LineStyle::Solid,
            line_width: 3.0,
        }
    }
}

/// Price that splits a baseline series into its top and bottom halves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseValuePrice {
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineStyleOptions {
    pub base_value: BaseValuePrice,
    pub top_fill_color1: Color,
    pub top_fill_color2: Color,
    pub top_line_color: Color,
    pub bottom_fill_color1: Color,
    pub bottom_fill_color2: Color,
    pub bottom_line_color: Color,
    pub line_width: f64,
    pub line_style: LineStyle,
}

impl Default for BaselineStyleOptions {
    fn default() -> Self {
        Self {
            base_value: BaseValuePrice::default(),
            top_fill_color1: teal().with_alpha(0.28),
            top_fill_color2: teal().with_alpha(0.05),
            top_line_color: teal(),
            bottom_fill_color1: red().with_alpha(0.05),
            bottom_fill_color2: red().with_alpha(0.28),
            bottom_line_color: red(),
            line_width: 3.0,
            line_style: LineStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyleOptions {
    pub color: Color,
    pub line_style: LineStyle,
    pub line_width: f64,
}

impl Default for LineStyleOptions {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x21, 0x96, 0xf3),
            line_style: LineStyle::Solid,
            line_width: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramStyleOptions {
    pub color: Color,
    pub base: f64,
}

impl Default for HistogramStyleOptions {
    fn default() -> Self {
        Self {
            color: teal(),
            base: 0.0,
        }
    }
}

/// Style options of a series, keyed by its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeriesStyleOptions {
    Bar(BarStyleOptions),
    Candlestick(CandlestickStyleOptions),
    Area(AreaStyleOptions),
    Baseline(BaselineStyleOptions),
    Line(LineStyleOptions),
    Histogram(HistogramStyleOptions),
}

impl SeriesStyleOptions {
    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        match self {
            Self::Bar(_) => SeriesType::Bar,
            Self::Candlestick(_) => SeriesType::Candlestick,
            Self::Area(_) => SeriesType::Area,
            Self::Baseline(_) => SeriesType::Baseline,
            Self::Line(_) => SeriesType::Line,
            Self::Histogram(_) => SeriesType::Histogram,
        }
    }

    /// Default style for `series_type`.
    #[must_use]
    pub fn defaults_for(series_type: SeriesType) -> Self {
        match series_type {
            SeriesType::Bar => Self::Bar(BarStyleOptions::default()),
            SeriesType::Candlestick => Self::Candlestick(CandlestickStyleOptions::default()),
            SeriesType::Area => Self::Area(AreaStyleOptions::default()),
            SeriesType::Baseline => Self::Baseline(BaselineStyleOptions::default()),
            SeriesType::Line => Self::Line(LineStyleOptions::default()),
            SeriesType::Histogram => Self::Histogram(HistogramStyleOptions::default()),
        }
    }
}
