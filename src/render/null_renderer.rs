use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless presenter usage.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect exactly what a real backend would have painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub release_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_rect_count = frame.rects.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn release(&mut self) -> ChartResult<()> {
        self.release_count += 1;
        self.last_frame = None;
        Ok(())
    }
}
