use thiserror::Error;

use crate::lwc::model::{PaneId, SeriesType, TimePointIndex};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("no bar exists at time point index {index}")]
    BarNotFound { index: TimePointIndex },

    #[error("crosshair is not attached to a pane")]
    DetachedCrosshair,

    #[error("pane {0:?} is not registered in the chart model")]
    UnknownPane(PaneId),

    #[error("price scale `{scale}` is not registered in pane {pane:?}")]
    UnknownPriceScale { pane: PaneId, scale: String },

    #[error("time scale has no point at index {index}")]
    MissingTimeScalePoint { index: TimePointIndex },

    #[error("series type mismatch: expected {expected:?}, got {actual:?}")]
    SeriesTypeMismatch {
        expected: SeriesType,
        actual: SeriesType,
    },
}

impl ChartError {
    /// Returns `true` for errors that report a broken caller contract rather
    /// than rejected input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::BarNotFound { .. }
                | Self::DetachedCrosshair
                | Self::UnknownPane(_)
                | Self::UnknownPriceScale { .. }
                | Self::MissingTimeScalePoint { .. }
                | Self::SeriesTypeMismatch { .. }
        )
    }
}
