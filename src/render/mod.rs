mod contrast;
mod frame;
mod null_renderer;
mod primitives;
mod style;
mod svg;

pub use contrast::{INSIDE_TEXT_MIN_CONTRAST, contrast_ratio, inside_text_color};
pub use frame::{DrawCommand, RenderFrame, Shape};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, EllipsePrimitive, FontSpec, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use style::{FontStyle, FunnelStyle};
pub use svg::SvgRenderer;

use crate::error::FunnelResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from layout, scene and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
