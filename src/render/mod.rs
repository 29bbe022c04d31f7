mod frame;
mod null_renderer;
mod primitives;

pub use frame::{RenderFrame, Viewport};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStyle, RectPrimitive, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame` filled by the view
/// renderers, so drawing code stays isolated from view invalidation.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
