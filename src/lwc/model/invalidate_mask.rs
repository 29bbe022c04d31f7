use std::collections::BTreeMap;

use super::PaneId;

/// How much of the chart a model mutation made stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum InvalidationLevel {
    #[default]
    None = 0,
    /// Only pointer-driven overlays (crosshair) changed.
    Cursor = 1,
    Light = 2,
    Full = 3,
}

/// Accumulated invalidation since the last draw cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvalidateMask {
    invalidated_panes: BTreeMap<PaneId, InvalidationLevel>,
    global_level: InvalidationLevel,
}

impl InvalidateMask {
    #[must_use]
    pub fn new(global_level: InvalidationLevel) -> Self {
        Self {
            invalidated_panes: BTreeMap::new(),
            global_level,
        }
    }

    #[must_use]
    pub fn full() -> Self {
        Self::new(InvalidationLevel::Full)
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new(InvalidationLevel::Light)
    }

    #[must_use]
    pub fn cursor() -> Self {
        Self::new(InvalidationLevel::Cursor)
    }

    #[must_use]
    pub fn full_invalidation(&self) -> InvalidationLevel {
        self.global_level
    }

    pub fn invalidate_pane(&mut self, pane: PaneId, level: InvalidationLevel) {
        let merged = self
            .invalidated_panes
            .get(&pane)
            .map_or(level, |previous| (*previous).max(level));
        self.invalidated_panes.insert(pane, merged);
    }

    /// Effective level for `pane`: the stronger of its own entry and the
    /// global level.
    #[must_use]
    pub fn invalidation_for_pane(&self, pane: PaneId) -> InvalidationLevel {
        self.invalidated_panes
            .get(&pane)
            .map_or(self.global_level, |level| self.global_level.max(*level))
    }

    /// Strongest level recorded anywhere in the mask.
    #[must_use]
    pub fn max_level(&self) -> InvalidationLevel {
        self.invalidated_panes
            .values()
            .copied()
            .fold(self.global_level, InvalidationLevel::max)
    }

    pub fn merge(&mut self, other: &InvalidateMask) {
        self.global_level = self.global_level.max(other.global_level);
        for (pane, level) in &other.invalidated_panes {
            self.invalidate_pane(*pane, *level);
        }
    }
}
