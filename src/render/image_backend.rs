use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, SurfaceSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_skipped: usize,
}

/// Software rasterizer into an in-memory RGBA buffer.
///
/// Rects and lines are painted with straight-alpha blending. Text needs a
/// font stack, so text primitives are only counted; use the cairo backend
/// when labels must appear in the output.
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    image: RgbaImage,
    clear_color: Color,
    last_stats: ImageRenderStats,
}

impl ImageRenderer {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        let clear_color = Color::rgb(1.0, 1.0, 1.0);
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, Rgba(clear_color.to_rgba8())),
            clear_color,
            last_stats: ImageRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "image-raster"
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> ImageRenderStats {
        self.last_stats
    }

    fn clear(&mut self) {
        let pixel = Rgba(self.clear_color.to_rgba8());
        for target in self.image.pixels_mut() {
            *target = pixel;
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let (x0, x1) = self.clamp_span(x, x + width, self.image.width());
        let (y0, y1) = self.clamp_span(y, y + height, self.image.height());
        for py in y0..y1 {
            for px in x0..x1 {
                blend_pixel(&mut self.image, px, py, color);
            }
        }
    }

    fn draw_rect(&mut self, rect: RectPrimitive) {
        self.fill_rect(rect.x, rect.y, rect.width, rect.height, rect.fill_color);
        if rect.border_width <= 0.0 {
            return;
        }

        let border = rect.border_width;
        let color = rect.border_color;
        self.fill_rect(rect.x, rect.y, rect.width, border, color);
        self.fill_rect(rect.x, rect.y + rect.height - border, rect.width, border, color);
        self.fill_rect(rect.x, rect.y + border, border, rect.height - 2.0 * border, color);
        self.fill_rect(
            rect.x + rect.width - border,
            rect.y + border,
            border,
            rect.height - 2.0 * border,
            color,
        );
    }

    /// Paints every pixel whose center lies within half the stroke width of
    /// the segment.
    fn draw_line(&mut self, line: LinePrimitive) {
        let half = line.stroke_width * 0.5;
        let (x0, x1) = self.clamp_span(
            line.x1.min(line.x2) - half,
            line.x1.max(line.x2) + half,
            self.image.width(),
        );
        let (y0, y1) = self.clamp_span(
            line.y1.min(line.y2) - half,
            line.y1.max(line.y2) + half,
            self.image.height(),
        );

        for py in y0..y1 {
            for px in x0..x1 {
                let cx = f64::from(px) + 0.5;
                let cy = f64::from(py) + 0.5;
                if distance_to_segment(cx, cy, line) <= half {
                    blend_pixel(&mut self.image, px, py, line.color);
                }
            }
        }
    }

    fn clamp_span(&self, start: f64, end: f64, limit: u32) -> (u32, u32) {
        let limit = f64::from(limit);
        let lo = start.round().clamp(0.0, limit);
        let hi = end.round().clamp(0.0, limit);
        (lo as u32, hi as u32)
    }
}

impl Renderer for ImageRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        if self.image.width() != frame.viewport.width
            || self.image.height() != frame.viewport.height
        {
            trace!(
                width = frame.viewport.width,
                height = frame.viewport.height,
                "resizing raster surface"
            );
            self.image = RgbaImage::new(frame.viewport.width, frame.viewport.height);
        }
        self.clear();

        let mut stats = ImageRenderStats::default();
        for rect in &frame.rects {
            self.draw_rect(*rect);
            stats.rects_drawn += 1;
        }
        for line in &frame.lines {
            self.draw_line(*line);
            stats.lines_drawn += 1;
        }
        stats.texts_skipped = frame.texts.len();

        self.last_stats = stats;
        Ok(())
    }

    fn release(&mut self) -> ChartResult<()> {
        self.clear();
        self.last_stats = ImageRenderStats::default();
        Ok(())
    }
}

impl SurfaceSnapshot for ImageRenderer {
    fn encode_png(&self) -> ChartResult<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|err| ChartError::Export(format!("failed to encode png: {err}")))?;
        Ok(bytes)
    }
}

fn blend_pixel(image: &mut RgbaImage, x: u32, y: u32, color: Color) {
    let src = color.to_rgba8();
    let dst = image.get_pixel(x, y).0;
    let alpha = f64::from(src[3]) / 255.0;
    let dst_alpha = f64::from(dst[3]) / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);

    let mut out = [0u8; 4];
    if out_alpha > 0.0 {
        for channel in 0..3 {
            let value = (f64::from(src[channel]) * alpha
                + f64::from(dst[channel]) * dst_alpha * (1.0 - alpha))
                / out_alpha;
            out[channel] = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    out[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    image.put_pixel(x, y, Rgba(out));
}

fn distance_to_segment(px: f64, py: f64, line: LinePrimitive) -> f64 {
    let dx = line.x2 - line.x1;
    let dy = line.y2 - line.y1;
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((px - line.x1) * dx + (py - line.y1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let nearest_x = line.x1 + t * dx;
    let nearest_y = line.y1 + t * dy;
    ((px - nearest_x).powi(2) + (py - nearest_y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::ImageRenderer;
    use crate::core::Viewport;
    use crate::render::{
        Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, SurfaceSnapshot,
    };

    #[test]
    fn opaque_rect_overwrites_background() {
        let mut renderer = ImageRenderer::new(10, 10).expect("renderer");
        let frame = RenderFrame::new(Viewport::new(10, 10)).with_rect(RectPrimitive::new(
            2.0,
            2.0,
            4.0,
            4.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));
        renderer.render(&frame).expect("render");

        assert_eq!(renderer.image().get_pixel(3, 3).0, [0, 0, 0, 255]);
        assert_eq!(renderer.image().get_pixel(8, 8).0, [255, 255, 255, 255]);
        assert_eq!(renderer.last_stats().rects_drawn, 1);
    }

    #[test]
    fn line_pixels_follow_segment() {
        let mut renderer = ImageRenderer::new(20, 20).expect("renderer");
        let frame = RenderFrame::new(Viewport::new(20, 20)).with_line(LinePrimitive::new(
            0.0,
            10.0,
            20.0,
            10.0,
            2.0,
            Color::rgb(1.0, 0.0, 0.0),
        ));
        renderer.render(&frame).expect("render");

        assert_eq!(renderer.image().get_pixel(5, 9).0, [255, 0, 0, 255]);
        assert_eq!(renderer.image().get_pixel(5, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn release_clears_surface() {
        let mut renderer = ImageRenderer::new(4, 4).expect("renderer");
        let frame = RenderFrame::new(Viewport::new(4, 4)).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            4.0,
            4.0,
            Color::rgb(0.0, 0.0, 1.0),
        ));
        renderer.render(&frame).expect("render");
        renderer.release().expect("release");
        assert_eq!(renderer.image().get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn png_snapshot_has_signature() {
        let renderer = ImageRenderer::new(3, 2).expect("renderer");
        let bytes = renderer.encode_png().expect("png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
