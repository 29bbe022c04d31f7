use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{StrictRange, TimePointIndex};

/// Position of each value inside a plot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum PlotRowValueIndex {
    Open = 0,
    High = 1,
    Low = 2,
    Close = 3,
}

pub type PlotRowValue = [f64; 4];

/// How `PlotList::search` resolves an index that has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchDirection {
    #[default]
    None,
    NearestLeft,
    NearestRight,
}

/// Per-bar color overrides. Unset channels fall back to the series style.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarColorOverrides {
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub wick_color: Option<Color>,
    pub line_color: Option<Color>,
    pub top_color: Option<Color>,
    pub bottom_color: Option<Color>,
    pub top_line_color: Option<Color>,
    pub bottom_line_color: Option<Color>,
    pub top_fill_color1: Option<Color>,
    pub top_fill_color2: Option<Color>,
    pub bottom_fill_color1: Option<Color>,
    pub bottom_fill_color2: Option<Color>,
}

/// One bar of a series. Values cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPlotRow {
    index: TimePointIndex,
    time: f64,
    value: PlotRowValue,
    overrides: BarColorOverrides,
}

impl SeriesPlotRow {
    /// Builds an OHLC row. All values must be finite.
    pub fn ohlc(
        index: TimePointIndex,
        time: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        if ![time, open, high, low, close].iter().all(|value| value.is_finite()) {
            return Err(ChartError::InvalidData(
                "plot row values must be finite".to_owned(),
            ));
        }
        Ok(Self {
            index,
            time,
            value: [open, high, low, close],
            overrides: BarColorOverrides::default(),
        })
    }

    /// Builds a row for single-value series (line, area, baseline,
    /// histogram); every value slot holds `value`.
    pub fn single_value(index: TimePointIndex, time: f64, value: f64) -> ChartResult<Self> {
        Self::ohlc(index, time, value, value, value, value)
    }

    /// Converts strongly-typed temporal/decimal input into an OHLC row.
    pub fn ohlc_from_decimal(
        index: TimePointIndex,
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::ohlc(
            index,
            time.timestamp_millis() as f64 / 1000.0,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: BarColorOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn index(&self) -> TimePointIndex {
        self.index
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn value(&self, index: PlotRowValueIndex) -> f64 {
        self.value[index as usize]
    }

    #[must_use]
    pub fn values(&self) -> &PlotRowValue {
        &self.value
    }

    #[must_use]
    pub fn overrides(&self) -> &BarColorOverrides {
        &self.overrides
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Bars of one series ordered by time point index.
#[derive(Debug, Clone, Default)]
pub struct PlotList {
    rows: Vec<SeriesPlotRow>,
}

impl PlotList {
    /// Replaces all rows. Indices must be strictly increasing.
    pub fn set_data(&mut self, rows: Vec<SeriesPlotRow>) -> ChartResult<()> {
        if rows.windows(2).any(|pair| pair[0].index >= pair[1].index) {
            return Err(ChartError::InvalidData(
                "plot row indices must be strictly increasing".to_owned(),
            ));
        }
        self.rows = rows;
        Ok(())
    }

    #[must_use]
    pub fn rows(&self) -> &[SeriesPlotRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&SeriesPlotRow> {
        self.rows.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&SeriesPlotRow> {
        self.rows.last()
    }

    /// Exact lookup by time point index (binary search).
    #[must_use]
    pub fn value_at(&self, index: TimePointIndex) -> Option<&SeriesPlotRow> {
        self.search(index, MismatchDirection::None)
    }

    #[must_use]
    pub fn search(
        &self,
        index: TimePointIndex,
        direction: MismatchDirection,
    ) -> Option<&SeriesPlotRow> {
        match self.rows.binary_search_by_key(&index, |row| row.index) {
            Ok(position) => Some(&self.rows[position]),
            Err(insert_at) => match direction {
                MismatchDirection::None => None,
                MismatchDirection::NearestLeft => insert_at
                    .checked_sub(1)
                    .and_then(|position| self.rows.get(position)),
                MismatchDirection::NearestRight => self.rows.get(insert_at),
            },
        }
    }

    /// Slice position of the first row with index `>= range.left()` and the
    /// rows inside the inclusive range.
    #[must_use]
    pub fn range_with_offset(&self, range: StrictRange) -> (usize, &[SeriesPlotRow]) {
        let start = self.rows.partition_point(|row| row.index < range.left());
        let end = self.rows.partition_point(|row| row.index <= range.right());
        let end = end.max(start);
        (start, &self.rows[start..end])
    }
}
