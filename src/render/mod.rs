mod frame;
mod image_backend;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use image_backend::{ImageRenderStats, ImageRenderer};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart configuration and lifecycle.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Drops whatever the previous chart left on the surface.
    ///
    /// Called exactly once for every chart instance that is torn down.
    fn release(&mut self) -> ChartResult<()> {
        Ok(())
    }
}

/// Surfaces whose current pixels can be serialized as a PNG image.
pub trait SurfaceSnapshot {
    fn encode_png(&self) -> ChartResult<Vec<u8>>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
