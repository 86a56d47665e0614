use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: checks each chart frame and records what it would draw.
///
/// Seat circles and legend swatches both count towards `last_circle_count`.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let RenderFrame {
            rects,
            circles,
            lines,
            texts,
            ..
        } = frame;
        self.frames_rendered += 1;
        self.last_rect_count = rects.len();
        self.last_circle_count = circles.len();
        self.last_line_count = lines.len();
        self.last_text_count = texts.len();
        Ok(())
    }
}
