mod frame;
mod layer_surface;
mod null_renderer;
mod primitives;

pub use frame::{GridLine, RenderFrame, SeriesLayer, SeriesPrimitives};
pub use layer_surface::LayerSurface;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from viewport math and input handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        (**self).render(frame)
    }
}
