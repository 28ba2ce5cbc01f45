mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AreaPrimitive, CirclePrimitive, Color, LinePrimitive, PathVertex, PolylinePrimitive,
    TextHAlign, TextPrimitive, VerticalGradient,
};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and must
/// fully clear the prior frame before drawing it, so passes never accumulate.
/// A backend that cannot acquire its drawable surface reports
/// `GraphError::SurfaceUnavailable` instead of skipping the pass.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
