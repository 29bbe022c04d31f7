mod crosshair_price_axis_view;
mod price_axis_view;

pub use crosshair_price_axis_view::{CrosshairPriceAxisUpdater, CrosshairPriceAxisView};
pub use price_axis_view::{PriceAxisView, PriceAxisViewData, PriceAxisViewUpdater};
