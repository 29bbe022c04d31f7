use serde::{Deserialize, Serialize};

use crate::render::{Color, LineStyle};

use super::{PaneId, PriceScale, TimePointIndex, TimeScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrosshairMode {
    Normal,
    /// Snaps to the close value of the nearest bar.
    #[default]
    Magnet,
    /// Snaps to the nearest of open/high/low/close.
    MagnetOhlc,
    /// Crosshair remains hidden regardless of pointer movement.
    Hidden,
}

/// Style and label settings of one crosshair line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairLineOptions {
    pub color: Color,
    pub width: f64,
    pub style: LineStyle,
    pub visible: bool,
    pub label_visible: bool,
    pub label_background_color: Color,
}

impl Default for CrosshairLineOptions {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x95, 0x98, 0xa1),
            width: 1.0,
            style: LineStyle::LargeDashed,
            visible: true,
            label_visible: true,
            label_background_color: Color::from_rgb8(0x13, 0x17, 0x22),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairOptions {
    pub mode: CrosshairMode,
    pub vert_line: CrosshairLineOptions,
    pub horz_line: CrosshairLineOptions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairPriceAndCoordinate {
    pub price: f64,
    pub coordinate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairTimeAndCoordinate {
    /// `None` when the crosshair index has no time on the scale.
    pub time: Option<f64>,
    pub coordinate: f64,
}

/// Maps a price scale to the price/coordinate the crosshair label shows.
pub type CrosshairPriceAxisViewValueProvider =
    Box<dyn Fn(&Crosshair, &PriceScale) -> CrosshairPriceAndCoordinate>;

/// Yields the time/coordinate the crosshair time label shows.
pub type TimeAndCoordinateProvider =
    Box<dyn Fn(&Crosshair, &TimeScale) -> CrosshairTimeAndCoordinate>;

/// Resolved pointer position, already mapped to pixels by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairPosition {
    pub index: TimePointIndex,
    pub price: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct Crosshair {
    options: CrosshairOptions,
    pane: Option<PaneId>,
    index: TimePointIndex,
    price: f64,
    x: f64,
    y: f64,
    visible: bool,
}

impl Crosshair {
    #[must_use]
    pub fn new(options: CrosshairOptions) -> Self {
        Self {
            options,
            pane: None,
            index: 0,
            price: f64::NAN,
            x: f64::NAN,
            y: f64::NAN,
            visible: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &CrosshairOptions {
        &self.options
    }

    pub fn apply_options(&mut self, options: CrosshairOptions) {
        self.options = options;
        if options.mode == CrosshairMode::Hidden {
            self.visible = false;
        }
    }

    /// Pane the crosshair was last positioned in; `None` until the first
    /// `set_position`.
    #[must_use]
    pub fn pane(&self) -> Option<PaneId> {
        self.pane
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The horizontal line shows only in the pane under the pointer.
    #[must_use]
    pub fn horz_line_visible(&self, pane: PaneId) -> bool {
        self.pane == Some(pane) && self.options.horz_line.visible
    }

    #[must_use]
    pub fn vert_line_visible(&self) -> bool {
        self.options.vert_line.visible
    }

    #[must_use]
    pub fn applied_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn applied_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn applied_index(&self) -> TimePointIndex {
        self.index
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_position(&mut self, position: CrosshairPosition, pane: PaneId) {
        self.index = position.index;
        self.price = position.price;
        self.x = position.x;
        self.y = position.y;
        self.pane = Some(pane);
        self.visible = self.options.mode != CrosshairMode::Hidden;
    }

    /// Hides the crosshair. The last index and pane are kept.
    pub fn clear_position(&mut self) {
        self.visible = false;
        self.price = f64::NAN;
        self.x = f64::NAN;
        self.y = f64::NAN;
    }

    /// Default price-axis value provider: the crosshair price and y.
    #[must_use]
    pub fn price_and_coordinate(&self, _price_scale: &PriceScale) -> CrosshairPriceAndCoordinate {
        CrosshairPriceAndCoordinate {
            price: self.price,
            coordinate: self.y,
        }
    }

    /// Default time-axis value provider: the time at the applied index and x.
    #[must_use]
    pub fn time_and_coordinate(&self, time_scale: &TimeScale) -> CrosshairTimeAndCoordinate {
        CrosshairTimeAndCoordinate {
            time: time_scale
                .index_to_time_scale_point(self.index)
                .map(|point| point.time),
            coordinate: self.x,
        }
    }
}
