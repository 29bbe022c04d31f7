mod chart_model;
mod chart_options;
mod crosshair;
mod invalidate_mask;
mod pane;
mod plot_data;
mod price_scale;
mod series;
mod series_bar_colorer;
mod series_options;
mod time_scale;

pub use chart_model::ChartModel;
pub use chart_options::{ChartOptions, LayoutOptions};
pub use crosshair::{
    Crosshair, CrosshairLineOptions, CrosshairMode, CrosshairOptions, CrosshairPosition,
    CrosshairPriceAndCoordinate, CrosshairPriceAxisViewValueProvider, CrosshairTimeAndCoordinate,
    TimeAndCoordinateProvider,
};
pub use invalidate_mask::{InvalidateMask, InvalidationLevel};
pub use pane::{Pane, PaneId, PriceScaleHandle};
pub use plot_data::{
    BarColorOverrides, MismatchDirection, PlotList, PlotRowValue, PlotRowValueIndex, SeriesPlotRow,
};
pub use price_scale::{PriceFormat, PriceRange, PriceScale, PriceScaleMode, PriceScaleOptions};
pub use series::{Series, SeriesId};
pub use series_bar_colorer::{
    AreaBarColorerStyle, BarColorerStyle, BarStyle, BaselineBarColorerStyle,
    CandlesticksColorerStyle, HistogramBarColorerStyle, LineBarColorerStyle, PrecomputedBars,
    SeriesBarColorer,
};
pub use series_options::{
    AreaStyleOptions, BarStyleOptions, BaseValuePrice, BaselineStyleOptions,
    CandlestickStyleOptions, HistogramStyleOptions, LineStyleOptions, SeriesStyleOptions,
    SeriesType,
};
pub use time_scale::{StrictRange, TimePointIndex, TimeScale, TimeScaleOptions, TimeScalePoint};
