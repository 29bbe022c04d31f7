use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PriceScale, PriceScaleOptions};

/// Stable handle of a pane inside a chart model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneId(u32);

impl PaneId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Handle of one price scale: the owning pane plus the scale id
/// (`"left"`, `"right"` or an overlay id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceScaleHandle {
    pub pane: PaneId,
    pub scale_id: String,
}

impl PriceScaleHandle {
    #[must_use]
    pub fn new(pane: PaneId, scale_id: impl Into<String>) -> Self {
        Self {
            pane,
            scale_id: scale_id.into(),
        }
    }

    #[must_use]
    pub fn right(pane: PaneId) -> Self {
        Self::new(pane, Pane::RIGHT_SCALE_ID)
    }

    #[must_use]
    pub fn left(pane: PaneId) -> Self {
        Self::new(pane, Pane::LEFT_SCALE_ID)
    }
}

#[derive(Debug, Clone)]
pub struct Pane {
    id: PaneId,
    height: f64,
    left_price_scale: PriceScale,
    right_price_scale: PriceScale,
    overlay_price_scales: BTreeMap<String, PriceScale>,
}

impl Pane {
    pub const LEFT_SCALE_ID: &'static str = "left";
    pub const RIGHT_SCALE_ID: &'static str = "right";

    #[must_use]
    pub fn new(
        id: PaneId,
        left_options: PriceScaleOptions,
        right_options: PriceScaleOptions,
    ) -> Self {
        Self {
            id,
            height: 0.0,
            left_price_scale: PriceScale::new(Self::LEFT_SCALE_ID, left_options),
            right_price_scale: PriceScale::new(Self::RIGHT_SCALE_ID, right_options),
            overlay_price_scales: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        for scale in self.price_scales_mut() {
            scale.set_height(height);
        }
    }

    #[must_use]
    pub fn left_price_scale(&self) -> &PriceScale {
        &self.left_price_scale
    }

    #[must_use]
    pub fn right_price_scale(&self) -> &PriceScale {
        &self.right_price_scale
    }

    #[must_use]
    pub fn price_scale(&self, id: &str) -> Option<&PriceScale> {
        match id {
            Self::LEFT_SCALE_ID => Some(&self.left_price_scale),
            Self::RIGHT_SCALE_ID => Some(&self.right_price_scale),
            _ => self.overlay_price_scales.get(id),
        }
    }

    #[must_use]
    pub fn price_scale_mut(&mut self, id: &str) -> Option<&mut PriceScale> {
        match id {
            Self::LEFT_SCALE_ID => Some(&mut self.left_price_scale),
            Self::RIGHT_SCALE_ID => Some(&mut self.right_price_scale),
            _ => self.overlay_price_scales.get_mut(id),
        }
    }

    pub fn ensure_overlay_price_scale(
        &mut self,
        id: impl Into<String>,
        options: PriceScaleOptions,
    ) -> &mut PriceScale {
        let id = id.into();
        let height = self.height;
        self.overlay_price_scales.entry(id.clone()).or_insert_with(|| {
            let mut scale = PriceScale::new(id, options);
            scale.set_height(height);
            scale
        })
    }

    pub fn price_scales(&self) -> impl Iterator<Item = &PriceScale> {
        [&self.left_price_scale, &self.right_price_scale]
            .into_iter()
            .chain(self.overlay_price_scales.values())
    }

    pub fn price_scales_mut(&mut self) -> impl Iterator<Item = &mut PriceScale> {
        [&mut self.left_price_scale, &mut self.right_price_scale]
            .into_iter()
            .chain(self.overlay_price_scales.values_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pane, PaneId};
    use crate::lwc::model::PriceScaleOptions;

    fn pane() -> Pane {
        Pane::new(
            PaneId::new(0),
            PriceScaleOptions::default(),
            PriceScaleOptions::default(),
        )
    }

    #[test]
    fn pane_creates_left_right_price_scales() {
        let pane = pane();
        assert_eq!(pane.left_price_scale().id(), "left");
        assert_eq!(pane.right_price_scale().id(), "right");
        assert_eq!(pane.price_scale("right").map(|s| s.id()), Some("right"));
        assert!(pane.price_scale("volume").is_none());
    }

    #[test]
    fn overlay_scales_inherit_pane_height() {
        let mut pane = pane();
        pane.set_height(240.0);
        let overlay = pane.ensure_overlay_price_scale("volume", PriceScaleOptions::default());
        assert_eq!(overlay.height(), 240.0);
        assert_eq!(pane.price_scales().count(), 3);
    }
}
