//! Views turn model state into renderer data.
//!
//! Every view owns its data record in a [`LazyViewData`], marks it stale on
//! `update()` and recomputes it on the next renderer request.

mod invalidated;
mod pane;
mod price_axis;
mod time_axis;

use smallvec::SmallVec;
use tracing::trace;

use crate::lwc::model::{ChartModel, InvalidateMask, InvalidationLevel, PaneId, PriceScaleHandle};

pub use invalidated::LazyViewData;
pub use pane::CrosshairPaneView;
pub use price_axis::{
    CrosshairPriceAxisUpdater, CrosshairPriceAxisView, PriceAxisView, PriceAxisViewData,
    PriceAxisViewUpdater,
};
pub use time_axis::CrosshairTimeAxisView;

/// All views of the crosshair: one pane view per pane, one label per price
/// scale and the time label.
#[derive(Debug, Default)]
pub struct CrosshairViews {
    pane_views: Vec<CrosshairPaneView>,
    price_axis_views: SmallVec<[CrosshairPriceAxisView; 2]>,
    time_axis_view: CrosshairTimeAxisView,
}

impl CrosshairViews {
    /// Views for every pane of `model` with labels on both side scales,
    /// using the default value providers.
    #[must_use]
    pub fn for_model(model: &ChartModel) -> Self {
        let mut views = Self::default();
        for pane in model.panes() {
            views.add_pane(pane.id());
        }
        views
    }

    /// Adds the pane view and left/right price labels of `pane`.
    pub fn add_pane(&mut self, pane: PaneId) {
        self.pane_views.push(CrosshairPaneView::new(pane));
        let left = CrosshairPriceAxisView::with_default_provider(PriceScaleHandle::left(pane));
        let right = CrosshairPriceAxisView::with_default_provider(PriceScaleHandle::right(pane));
        self.price_axis_views.push(left);
        self.price_axis_views.push(right);
    }

    pub fn add_price_axis_view(&mut self, view: CrosshairPriceAxisView) {
        self.price_axis_views.push(view);
    }

    pub fn pane_view_mut(&mut self, pane: PaneId) -> Option<&mut CrosshairPaneView> {
        self.pane_views.iter_mut().find(|view| view.pane() == pane)
    }

    /// Price label bound to `handle`, if one was added.
    pub fn price_axis_view_mut(
        &mut self,
        handle: &PriceScaleHandle,
    ) -> Option<&mut CrosshairPriceAxisView> {
        self.price_axis_views
            .iter_mut()
            .find(|view| view.updater().price_scale() == handle)
    }

    pub fn price_axis_views_mut(&mut self) -> impl Iterator<Item = &mut CrosshairPriceAxisView> {
        self.price_axis_views.iter_mut()
    }

    pub fn time_axis_view_mut(&mut self) -> &mut CrosshairTimeAxisView {
        &mut self.time_axis_view
    }

    pub fn update_all(&mut self) {
        for view in &mut self.pane_views {
            view.update();
        }
        for view in &mut self.price_axis_views {
            view.update();
        }
        self.time_axis_view.update();
    }

    /// Invalidates every view when `mask` carries at least a cursor-level
    /// change. Returns whether anything was invalidated.
    pub fn apply_invalidation(&mut self, mask: &InvalidateMask) -> bool {
        let level = mask.max_level();
        if level < InvalidationLevel::Cursor {
            return false;
        }
        trace!(?level, "invalidate crosshair views");
        self.update_all();
        true
    }

    /// Drains the model's pending invalidation into the views.
    pub fn sync_with(&mut self, model: &mut ChartModel) -> bool {
        model
            .take_pending_invalidation()
            .is_some_and(|mask| self.apply_invalidation(&mask))
    }
}
