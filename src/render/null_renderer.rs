use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless backend: validates each frame and remembers what it contained.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    /// Label texts of the last frame, in emission order.
    pub last_labels: Vec<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_labels = frame.texts.iter().map(|text| text.text.clone()).collect();
        Ok(())
    }
}
