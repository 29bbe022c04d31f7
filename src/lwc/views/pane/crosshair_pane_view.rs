use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::lwc::model::{ChartModel, PaneId};
use crate::lwc::renderers::{CrosshairRenderer, CrosshairRendererData};
use crate::lwc::views::LazyViewData;

/// Crosshair lines drawn inside one pane.
#[derive(Debug, Clone)]
pub struct CrosshairPaneView {
    pane: PaneId,
    data: LazyViewData<CrosshairRendererData>,
}

impl CrosshairPaneView {
    #[must_use]
    pub fn new(pane: PaneId) -> Self {
        Self {
            pane,
            data: LazyViewData::default(),
        }
    }

    #[must_use]
    pub fn pane(&self) -> PaneId {
        self.pane
    }

    pub fn update(&mut self) {
        self.data.invalidate();
    }

    /// Fails when the crosshair was never attached to a pane or this view's
    /// pane is not registered in `model`.
    pub fn renderer(&mut self, model: &ChartModel) -> ChartResult<CrosshairRenderer<'_>> {
        let pane = self.pane;
        let data = self.data.get_or_recompute(|data| {
            trace!(pane = pane.raw(), "recompute crosshair pane view");
            let crosshair = model.crosshair();
            if crosshair.pane().is_none() {
                warn!(
                    pane = pane.raw(),
                    "crosshair pane view has no attached crosshair"
                );
                return Err(ChartError::DetachedCrosshair);
            }
            model.pane(pane)?;
            let options = &model.options().crosshair;
            let visible = crosshair.visible();

            data.horz_line.visible = visible && crosshair.horz_line_visible(pane);
            data.vert_line.visible = visible && crosshair.vert_line_visible();

            data.horz_line.line_width = options.horz_line.width;
            data.horz_line.line_style = options.horz_line.style;
            data.horz_line.color = options.horz_line.color;

            data.vert_line.line_width = options.vert_line.width;
            data.vert_line.line_style = options.vert_line.style;
            data.vert_line.color = options.vert_line.color;

            data.x = crosshair.applied_x();
            data.y = crosshair.applied_y();
            Ok(())
        })?;
        Ok(CrosshairRenderer::new(data))
    }
}
