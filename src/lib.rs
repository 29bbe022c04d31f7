//! chart-views: view and renderer-composition layer for financial charts.
//!
//! Crosshair pane/axis views recompute their renderer data lazily after
//! invalidation, and the series bar colorer resolves per-bar paint styles for
//! the six builtin series kinds, following Lightweight Charts semantics.

pub mod error;
pub mod lwc;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use lwc::model::{ChartModel, ChartOptions, SeriesBarColorer};
pub use lwc::views::{
    CrosshairPaneView, CrosshairPriceAxisView, CrosshairTimeAxisView, CrosshairViews,
};
