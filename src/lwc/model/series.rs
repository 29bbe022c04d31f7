use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{
    PlotList, PlotRowValueIndex, PriceScaleHandle, SeriesBarColorer, SeriesPlotRow,
    SeriesStyleOptions, SeriesType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A plotted series: fixed type, style options and ordered bars.
#[derive(Debug, Clone)]
pub struct Series {
    id: SeriesId,
    price_scale: PriceScaleHandle,
    options: SeriesStyleOptions,
    bars: PlotList,
}

impl Series {
    #[must_use]
    pub fn new(id: SeriesId, price_scale: PriceScaleHandle, options: SeriesStyleOptions) -> Self {
        Self {
            id,
            price_scale,
            options,
            bars: PlotList::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn price_scale(&self) -> &PriceScaleHandle {
        &self.price_scale
    }

    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        self.options.series_type()
    }

    #[must_use]
    pub fn options(&self) -> &SeriesStyleOptions {
        &self.options
    }

    /// Replaces the style options. The series type is fixed at creation, so
    /// options of another type are rejected.
    pub fn apply_options(&mut self, options: SeriesStyleOptions) -> ChartResult<()> {
        if options.series_type() != self.series_type() {
            return Err(ChartError::SeriesTypeMismatch {
                expected: self.series_type(),
                actual: options.series_type(),
            });
        }
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn bars(&self) -> &PlotList {
        &self.bars
    }

    pub fn set_data(&mut self, rows: Vec<SeriesPlotRow>) -> ChartResult<()> {
        self.bars.set_data(rows)?;
        debug!(
            series = self.id.raw(),
            count = self.bars.len(),
            "replace series data"
        );
        Ok(())
    }

    /// Close value of the first bar.
    #[must_use]
    pub fn first_value(&self) -> Option<f64> {
        self.bars
            .first()
            .map(|row| row.value(PlotRowValueIndex::Close))
    }

    #[must_use]
    pub fn bar_colorer(&self) -> SeriesBarColorer<'_> {
        SeriesBarColorer::new(self)
    }
}
