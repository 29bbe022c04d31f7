use std::fmt;

use tracing::trace;

use crate::error::ChartResult;
use crate::lwc::helpers::generate_contrast_colors;
use crate::lwc::model::{
    ChartModel, Crosshair, CrosshairPriceAxisViewValueProvider, PriceScale, PriceScaleHandle,
};
use crate::lwc::renderers::{PriceAxisViewRendererCommonData, PriceAxisViewRendererData};

use super::{PriceAxisView, PriceAxisViewUpdater};

/// Crosshair price label on one price scale.
pub type CrosshairPriceAxisView = PriceAxisView<CrosshairPriceAxisUpdater>;

/// Label padding added above and below the text, relative to font size.
const ADDITIONAL_PADDING_RATIO: f64 = 2.0 / 12.0;

pub struct CrosshairPriceAxisUpdater {
    price_scale: PriceScaleHandle,
    value_provider: CrosshairPriceAxisViewValueProvider,
}

impl fmt::Debug for CrosshairPriceAxisUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosshairPriceAxisUpdater")
            .field("price_scale", &self.price_scale)
            .finish_non_exhaustive()
    }
}

impl CrosshairPriceAxisUpdater {
    #[must_use]
    pub fn new(
        price_scale: PriceScaleHandle,
        value_provider: CrosshairPriceAxisViewValueProvider,
    ) -> Self {
        Self {
            price_scale,
            value_provider,
        }
    }

    #[must_use]
    pub fn price_scale(&self) -> &PriceScaleHandle {
        &self.price_scale
    }
}

impl PriceAxisView<CrosshairPriceAxisUpdater> {
    #[must_use]
    pub fn for_price_scale(
        price_scale: PriceScaleHandle,
        value_provider: CrosshairPriceAxisViewValueProvider,
    ) -> Self {
        Self::new(CrosshairPriceAxisUpdater::new(price_scale, value_provider))
    }

    /// Shows the crosshair's own price at its applied y.
    #[must_use]
    pub fn with_default_provider(price_scale: PriceScaleHandle) -> Self {
        Self::for_price_scale(
            price_scale,
            Box::new(|crosshair: &Crosshair, scale: &PriceScale| {
                crosshair.price_and_coordinate(scale)
            }),
        )
    }
}

impl PriceAxisViewUpdater for CrosshairPriceAxisUpdater {
    fn update_renderer_data(
        &self,
        model: &ChartModel,
        axis: &mut PriceAxisViewRendererData,
        _pane: &mut PriceAxisViewRendererData,
        common: &mut PriceAxisViewRendererCommonData,
    ) -> ChartResult<()> {
        trace!(
            pane = self.price_scale.pane.raw(),
            scale = %self.price_scale.scale_id,
            "recompute crosshair price axis view"
        );
        axis.visible = false;
        let crosshair = model.crosshair();
        let options = &crosshair.options().horz_line;
        if !options.label_visible {
            return Ok(());
        }

        let price_scale = model.price_scale(&self.price_scale)?;
        let Some(first_value) = price_scale.first_value() else {
            return Ok(());
        };
        if !crosshair.visible() || price_scale.is_empty() {
            return Ok(());
        }

        let colors = generate_contrast_colors(options.label_background_color);
        common.background = colors.background;
        common.color = colors.foreground;

        let additional_padding = ADDITIONAL_PADDING_RATIO * price_scale.font_size();
        common.additional_padding_top = additional_padding;
        common.additional_padding_bottom = additional_padding;

        let value = (self.value_provider)(crosshair, price_scale);
        common.coordinate = value.coordinate;
        axis.text = price_scale.format_price(value.price, first_value);
        axis.visible = true;
        Ok(())
    }
}
