use crate::error::ChartResult;
use crate::lwc::model::ChartModel;
use crate::lwc::renderers::{
    PriceAxisViewRenderer, PriceAxisViewRendererCommonData, PriceAxisViewRendererData,
};
use crate::lwc::views::LazyViewData;

/// Cached label state of a price axis view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceAxisViewData {
    pub axis: PriceAxisViewRendererData,
    pub pane: PriceAxisViewRendererData,
    pub common: PriceAxisViewRendererCommonData,
}

/// Fills price label data from model state for one kind of label source.
pub trait PriceAxisViewUpdater {
    fn update_renderer_data(
        &self,
        model: &ChartModel,
        axis: &mut PriceAxisViewRendererData,
        pane: &mut PriceAxisViewRendererData,
        common: &mut PriceAxisViewRendererCommonData,
    ) -> ChartResult<()>;
}

/// A price axis label with an axis-side and a pane-side renderer sharing one
/// lazily recomputed cache.
#[derive(Debug, Clone)]
pub struct PriceAxisView<U> {
    updater: U,
    data: LazyViewData<PriceAxisViewData>,
}

impl<U: PriceAxisViewUpdater> PriceAxisView<U> {
    #[must_use]
    pub fn new(updater: U) -> Self {
        Self {
            updater,
            data: LazyViewData::default(),
        }
    }

    #[must_use]
    pub fn updater(&self) -> &U {
        &self.updater
    }

    pub fn update(&mut self) {
        self.data.invalidate();
    }

    pub fn data(&mut self, model: &ChartModel) -> ChartResult<&PriceAxisViewData> {
        let updater = &self.updater;
        self.data.get_or_recompute(|data| {
            data.axis.tick_visible = true;
            data.pane.tick_visible = false;
            updater.update_renderer_data(model, &mut data.axis, &mut data.pane, &mut data.common)
        })
    }

    pub fn renderer(&mut self, model: &ChartModel) -> ChartResult<PriceAxisViewRenderer<'_>> {
        let data = self.data(model)?;
        Ok(PriceAxisViewRenderer::new(&data.axis, &data.common))
    }

    pub fn pane_renderer(&mut self, model: &ChartModel) -> ChartResult<PriceAxisViewRenderer<'_>> {
        let data = self.data(model)?;
        Ok(PriceAxisViewRenderer::new(&data.pane, &data.common))
    }

    /// Whether either the axis label or the pane label shows.
    pub fn is_visible(&mut self, model: &ChartModel) -> ChartResult<bool> {
        let data = self.data(model)?;
        Ok(data.axis.visible || data.pane.visible)
    }

    pub fn is_axis_label_visible(&mut self, model: &ChartModel) -> ChartResult<bool> {
        Ok(self.data(model)?.axis.visible)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{PriceAxisView, PriceAxisViewUpdater};
    use crate::error::ChartResult;
    use crate::lwc::model::{ChartModel, ChartOptions};
    use crate::lwc::renderers::{PriceAxisViewRendererCommonData, PriceAxisViewRendererData};

    #[derive(Default)]
    struct CountingUpdater {
        runs: Cell<u32>,
    }

    impl PriceAxisViewUpdater for CountingUpdater {
        fn update_renderer_data(
            &self,
            _model: &ChartModel,
            axis: &mut PriceAxisViewRendererData,
            pane: &mut PriceAxisViewRendererData,
            _common: &mut PriceAxisViewRendererCommonData,
        ) -> ChartResult<()> {
            self.runs.set(self.runs.get() + 1);
            axis.visible = true;
            axis.text = format!("run {}", self.runs.get());
            pane.visible = false;
            Ok(())
        }
    }

    #[test]
    fn base_resets_tick_flags_and_caches_until_update() {
        let model = ChartModel::new(ChartOptions::default()).expect("model");
        let mut view = PriceAxisView::new(CountingUpdater::default());

        assert!(view.is_visible(&model).expect("visible"));
        let renderer = view.renderer(&model).expect("renderer");
        assert_eq!(renderer.data().text, "run 1");
        assert!(renderer.data().tick_visible);
        let pane_renderer = view.pane_renderer(&model).expect("pane");
        assert!(!pane_renderer.data().tick_visible);
        assert_eq!(view.updater().runs.get(), 1);

        view.update();
        assert!(view.is_axis_label_visible(&model).expect("axis"));
        assert_eq!(view.updater().runs.get(), 2);
    }
}
