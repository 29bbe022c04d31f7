mod crosshair_renderer;
mod price_axis_view_renderer;
mod time_axis_view_renderer;

pub use crosshair_renderer::{CrosshairLineRendererData, CrosshairRenderer, CrosshairRendererData};
pub use price_axis_view_renderer::{
    PriceAxisRendererOptions, PriceAxisSide, PriceAxisViewRenderer, PriceAxisViewRendererCommonData,
    PriceAxisViewRendererData,
};
pub use time_axis_view_renderer::{
    TimeAxisRendererOptions, TimeAxisViewRenderer, TimeAxisViewRendererData,
};
