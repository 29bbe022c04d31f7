use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};

use super::{
    ChartOptions, Crosshair, CrosshairPosition, InvalidateMask, InvalidationLevel, Pane, PaneId,
    PlotRowValueIndex, PriceRange, PriceScale, PriceScaleHandle, Series, SeriesId, SeriesPlotRow,
    SeriesStyleOptions, TimeScale, TimeScalePoint,
};

/// Registry of panes, series, the time scale and the crosshair.
///
/// Views never own model state; they hold handles and resolve them here on
/// every recompute.
#[derive(Debug, Clone)]
pub struct ChartModel {
    options: ChartOptions,
    time_scale: TimeScale,
    panes: IndexMap<PaneId, Pane>,
    series: IndexMap<SeriesId, Series>,
    crosshair: Crosshair,
    next_pane_id: u32,
    next_series_id: u32,
    pending_invalidation: Option<InvalidateMask>,
}

impl ChartModel {
    pub fn new(options: ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self {
            time_scale: TimeScale::new(options.time_scale.clone()),
            crosshair: Crosshair::new(options.crosshair),
            options,
            panes: IndexMap::new(),
            series: IndexMap::new(),
            next_pane_id: 0,
            next_series_id: 0,
            pending_invalidation: Some(InvalidateMask::full()),
        })
    }

    /// Model with one empty pane, the usual starting point of a chart.
    pub fn with_default_pane(options: ChartOptions) -> ChartResult<(Self, PaneId)> {
        let mut model = Self::new(options)?;
        let pane = model.add_pane();
        Ok((model, pane))
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn apply_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        options.validate()?;
        let font_size = options.layout.font_size;
        for pane in self.panes.values_mut() {
            for scale in pane.price_scales_mut() {
                match scale.id() {
                    Pane::LEFT_SCALE_ID => scale.apply_options(options.left_price_scale),
                    Pane::RIGHT_SCALE_ID => scale.apply_options(options.right_price_scale),
                    _ => {}
                }
                scale.set_font_size(font_size)?;
            }
        }
        self.crosshair.apply_options(options.crosshair);
        self.time_scale.apply_options(options.time_scale.clone());
        self.options = options;
        self.invalidate(InvalidateMask::full());
        Ok(())
    }

    pub fn add_pane(&mut self) -> PaneId {
        let id = PaneId::new(self.next_pane_id);
        self.next_pane_id += 1;
        let mut pane = Pane::new(
            id,
            self.options.left_price_scale,
            self.options.right_price_scale,
        );
        for scale in pane.price_scales_mut() {
            // Font size was validated with the options.
            let _ = scale.set_font_size(self.options.layout.font_size);
        }
        self.panes.insert(id, pane);
        self.invalidate(InvalidateMask::full());
        id
    }

    pub fn panes(&self) -> impl Iterator<Item = &Pane> {
        self.panes.values()
    }

    pub fn pane(&self, id: PaneId) -> ChartResult<&Pane> {
        trace!(pane = id.raw(), "resolve pane");
        self.panes.get(&id).ok_or_else(|| {
            warn!(pane = id.raw(), "pane handle does not resolve");
            ChartError::UnknownPane(id)
        })
    }

    pub fn pane_mut(&mut self, id: PaneId) -> ChartResult<&mut Pane> {
        self.panes.get_mut(&id).ok_or_else(|| {
            warn!(pane = id.raw(), "pane handle does not resolve");
            ChartError::UnknownPane(id)
        })
    }

    pub fn set_pane_height(&mut self, id: PaneId, height: f64) -> ChartResult<()> {
        self.pane_mut(id)?.set_height(height);
        let mut mask = InvalidateMask::new(InvalidationLevel::None);
        mask.invalidate_pane(id, InvalidationLevel::Full);
        self.invalidate(mask);
        Ok(())
    }

    pub fn price_scale(&self, handle: &PriceScaleHandle) -> ChartResult<&PriceScale> {
        let pane = self.pane(handle.pane)?;
        trace!(pane = handle.pane.raw(), scale = %handle.scale_id, "resolve price scale");
        pane.price_scale(&handle.scale_id).ok_or_else(|| {
            warn!(
                pane = handle.pane.raw(),
                scale = %handle.scale_id,
                "price scale handle does not resolve"
            );
            ChartError::UnknownPriceScale {
                pane: handle.pane,
                scale: handle.scale_id.clone(),
            }
        })
    }

    pub fn price_scale_mut(&mut self, handle: &PriceScaleHandle) -> ChartResult<&mut PriceScale> {
        let pane = self.pane_mut(handle.pane)?;
        pane.price_scale_mut(&handle.scale_id)
            .ok_or_else(|| ChartError::UnknownPriceScale {
                pane: handle.pane,
                scale: handle.scale_id.clone(),
            })
    }

    #[must_use]
    pub fn time_scale(&self) -> &TimeScale {
        &self.time_scale
    }

    pub fn set_time_scale_width(&mut self, width: f64) -> ChartResult<()> {
        self.time_scale.set_width(width)?;
        self.light_update();
        Ok(())
    }

    pub fn set_time_scale_points(&mut self, points: Vec<TimeScalePoint>) -> ChartResult<()> {
        self.time_scale.set_points(points)?;
        self.light_update();
        Ok(())
    }

    #[must_use]
    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    pub fn set_crosshair_position(
        &mut self,
        position: CrosshairPosition,
        pane: PaneId,
    ) -> ChartResult<()> {
        self.pane(pane)?;
        self.crosshair.set_position(position, pane);
        self.cursor_update();
        Ok(())
    }

    pub fn clear_crosshair_position(&mut self) {
        self.crosshair.clear_position();
        self.cursor_update();
    }

    /// Adds a series bound to an existing price scale; overlay scale ids are
    /// created on demand.
    pub fn add_series(
        &mut self,
        price_scale: PriceScaleHandle,
        options: SeriesStyleOptions,
    ) -> ChartResult<SeriesId> {
        let font_size = self.options.layout.font_size;
        let overlay_options = self.options.right_price_scale;
        let pane = self.pane_mut(price_scale.pane)?;
        if pane.price_scale(&price_scale.scale_id).is_none() {
            pane.ensure_overlay_price_scale(price_scale.scale_id.clone(), overlay_options)
                .set_font_size(font_size)?;
        }
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id += 1;
        self.series.insert(id, Series::new(id, price_scale, options));
        self.invalidate(InvalidateMask::full());
        Ok(id)
    }

    pub fn series(&self, id: SeriesId) -> ChartResult<&Series> {
        self.series.get(&id).ok_or_else(|| unknown_series(id))
    }

    pub fn series_iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn apply_series_options(
        &mut self,
        id: SeriesId,
        options: SeriesStyleOptions,
    ) -> ChartResult<()> {
        let series = self.series.get_mut(&id).ok_or_else(|| unknown_series(id))?;
        series.apply_options(options)?;
        self.light_update();
        Ok(())
    }

    /// Replaces a series' bars and refreshes the first value and price range
    /// of its price scale.
    pub fn set_series_data(&mut self, id: SeriesId, rows: Vec<SeriesPlotRow>) -> ChartResult<()> {
        let series = self.series.get_mut(&id).ok_or_else(|| unknown_series(id))?;
        series.set_data(rows)?;
        let handle = series.price_scale().clone();

        self.refresh_price_scale(&handle)?;
        self.light_update();
        Ok(())
    }

    /// Recomputes a scale's first value and price range from every series
    /// bound to it. The first series (in insertion order) with data supplies
    /// the first value.
    fn refresh_price_scale(&mut self, handle: &PriceScaleHandle) -> ChartResult<()> {
        let bound: Vec<&Series> = self
            .series
            .values()
            .filter(|series| series.price_scale() == handle)
            .collect();
        let first_value = bound.iter().find_map(|series| series.first_value());
        let range = bound
            .iter()
            .flat_map(|series| series.bars().rows())
            .fold(None::<PriceRange>, |acc, row| {
                let low = row.value(PlotRowValueIndex::Low);
                let high = row.value(PlotRowValueIndex::High);
                Some(acc.map_or(PriceRange::new(low, high), |range| {
                    PriceRange::new(range.min().min(low), range.max().max(high))
                }))
            });

        let scale = self.price_scale_mut(handle)?;
        scale.set_first_value(first_value);
        scale.set_price_range(range);
        Ok(())
    }

    pub fn invalidate(&mut self, mask: InvalidateMask) {
        if let Some(pending) = &mut self.pending_invalidation {
            pending.merge(&mask);
        } else {
            self.pending_invalidation = Some(mask);
        }
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> Option<&InvalidateMask> {
        self.pending_invalidation.as_ref()
    }

    pub fn take_pending_invalidation(&mut self) -> Option<InvalidateMask> {
        self.pending_invalidation.take()
    }

    pub fn full_update(&mut self) {
        self.invalidate(InvalidateMask::full());
    }

    pub fn light_update(&mut self) {
        self.invalidate(InvalidateMask::light());
    }

    pub fn cursor_update(&mut self) {
        self.invalidate(InvalidateMask::cursor());
    }
}

fn unknown_series(id: SeriesId) -> ChartError {
    ChartError::InvalidData(format!("unknown series {}", id.raw()))
}
