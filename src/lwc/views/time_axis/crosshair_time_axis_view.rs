use std::fmt;

use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::lwc::helpers::generate_contrast_colors;
use crate::lwc::model::{ChartModel, Crosshair, TimeAndCoordinateProvider, TimeScale};
use crate::lwc::renderers::{TimeAxisViewRenderer, TimeAxisViewRendererData};
use crate::lwc::views::LazyViewData;

/// Crosshair date/time label on the time axis.
pub struct CrosshairTimeAxisView {
    value_provider: TimeAndCoordinateProvider,
    data: LazyViewData<TimeAxisViewRendererData>,
}

impl fmt::Debug for CrosshairTimeAxisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosshairTimeAxisView")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl Default for CrosshairTimeAxisView {
    fn default() -> Self {
        Self::with_default_provider()
    }
}

impl CrosshairTimeAxisView {
    #[must_use]
    pub fn new(value_provider: TimeAndCoordinateProvider) -> Self {
        Self {
            value_provider,
            data: LazyViewData::default(),
        }
    }

    /// Shows the time at the crosshair's applied index and x.
    #[must_use]
    pub fn with_default_provider() -> Self {
        Self::new(Box::new(|crosshair: &Crosshair, time_scale: &TimeScale| {
            crosshair.time_and_coordinate(time_scale)
        }))
    }

    pub fn update(&mut self) {
        self.data.invalidate();
    }

    /// Fails when a visible label's crosshair index has no time scale point.
    pub fn renderer(&mut self, model: &ChartModel) -> ChartResult<TimeAxisViewRenderer<'_>> {
        let provider = &self.value_provider;
        let data = self.data.get_or_recompute(|data| {
            trace!("recompute crosshair time axis view");
            let time_scale = model.time_scale();
            data.visible = false;
            // Layout reads the width even while the label is hidden.
            data.width = time_scale.width();

            let crosshair = model.crosshair();
            let options = &crosshair.options().vert_line;
            if !options.label_visible || time_scale.is_empty() {
                return Ok(());
            }

            let value = provider(crosshair, time_scale);
            if value.time.is_none() {
                return Ok(());
            }

            data.coordinate = value.coordinate;
            let index = crosshair.applied_index();
            let point = time_scale.index_to_time_scale_point(index).ok_or_else(|| {
                warn!(index, "crosshair index has no time scale point");
                ChartError::MissingTimeScalePoint { index }
            })?;
            data.text = time_scale.format_date_time(point);
            data.visible = true;

            let colors = generate_contrast_colors(options.label_background_color);
            data.background = colors.background;
            data.color = colors.foreground;
            data.tick_visible = time_scale.options().ticks_visible;
            Ok(())
        })?;
        Ok(TimeAxisViewRenderer::new(data))
    }
}
