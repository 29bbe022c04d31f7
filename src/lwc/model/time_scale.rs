use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub type TimePointIndex = i64;

const DATE_TIME_SEPARATOR: &str = "   ";

/// Inclusive range of time point indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrictRange {
    left: TimePointIndex,
    right: TimePointIndex,
}

impl StrictRange {
    #[must_use]
    pub fn new(left: TimePointIndex, right: TimePointIndex) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn left(self) -> TimePointIndex {
        self.left
    }

    #[must_use]
    pub fn right(self) -> TimePointIndex {
        self.right
    }

    #[must_use]
    pub fn count(self) -> usize {
        if self.right < self.left {
            0
        } else {
            (self.right - self.left + 1) as usize
        }
    }

    #[must_use]
    pub fn contains(self, index: TimePointIndex) -> bool {
        self.left <= index && index <= self.right
    }
}

/// One slot on the horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeScalePoint {
    /// Unix timestamp in seconds (UTC).
    pub time: f64,
    pub original_time: Option<f64>,
}

impl TimeScalePoint {
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self {
            time,
            original_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScaleOptions {
    /// Draw a tick mark under the crosshair time label.
    pub ticks_visible: bool,
    /// Append hours and minutes to formatted date labels.
    pub time_visible: bool,
    pub seconds_visible: bool,
    /// `chrono` strftime pattern for the date part of a label.
    pub date_format: String,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self {
            ticks_visible: false,
            time_visible: false,
            seconds_visible: true,
            date_format: "%d %b '%y".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeScale {
    options: TimeScaleOptions,
    width: f64,
    points: Vec<TimeScalePoint>,
}

impl TimeScale {
    #[must_use]
    pub fn new(options: TimeScaleOptions) -> Self {
        Self {
            options,
            width: 0.0,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &TimeScaleOptions {
        &self.options
    }

    pub fn apply_options(&mut self, options: TimeScaleOptions) {
        self.options = options;
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and >= 0".to_owned(),
            ));
        }
        self.width = width;
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.points.is_empty()
    }

    /// Replaces all time points.
    ///
    /// Times must be finite and strictly increasing.
    pub fn set_points(&mut self, points: Vec<TimeScalePoint>) -> ChartResult<()> {
        if points.iter().any(|point| !point.time.is_finite()) {
            return Err(ChartError::InvalidData(
                "time scale point times must be finite".to_owned(),
            ));
        }
        if points.windows(2).any(|pair| pair[0].time >= pair[1].time) {
            return Err(ChartError::InvalidData(
                "time scale points must be strictly increasing".to_owned(),
            ));
        }
        debug!(count = points.len(), "replace time scale points");
        self.points = points;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[TimeScalePoint] {
        &self.points
    }

    #[must_use]
    pub fn index_to_time_scale_point(&self, index: TimePointIndex) -> Option<&TimeScalePoint> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.points.get(index))
    }

    /// Formats a point as a UTC date, plus time of day when `time_visible`.
    #[must_use]
    pub fn format_date_time(&self, point: &TimeScalePoint) -> String {
        let seconds = point.time.floor();
        let fraction = (point.time - seconds) * 1e9;
        let nanos = fraction.round().clamp(0.0, 999_999_999.0) as u32;
        let Some(date_time) = DateTime::<Utc>::from_timestamp(seconds as i64, nanos) else {
            return format!("{:.2}", point.time);
        };

        let mut label = String::new();
        if write!(label, "{}", date_time.format(&self.options.date_format)).is_err() {
            label.clear();
            let _ = write!(label, "{}", date_time.format("%Y-%m-%d"));
        }

        if self.options.time_visible {
            let time_pattern = if self.options.seconds_visible {
                "%H:%M:%S"
            } else {
                "%H:%M"
            };
            label.push_str(DATE_TIME_SEPARATOR);
            let _ = write!(label, "{}", date_time.format(time_pattern));
        }

        label
    }
}
