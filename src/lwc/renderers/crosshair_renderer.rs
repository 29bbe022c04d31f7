use crate::render::{Color, LinePrimitive, LineStyle, RenderFrame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairLineRendererData {
    pub line_width: f64,
    pub line_style: LineStyle,
    pub color: Color,
    pub visible: bool,
}

impl Default for CrosshairLineRendererData {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_style: LineStyle::Solid,
            color: Color::TRANSPARENT,
            visible: false,
        }
    }
}

/// Draw-time state of the crosshair lines in one pane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CrosshairRendererData {
    pub vert_line: CrosshairLineRendererData,
    pub horz_line: CrosshairLineRendererData,
    pub x: f64,
    pub y: f64,
}

/// Read-only view over crosshair data owned by a pane view.
#[derive(Debug, Clone, Copy)]
pub struct CrosshairRenderer<'a> {
    data: &'a CrosshairRendererData,
}

impl<'a> CrosshairRenderer<'a> {
    #[must_use]
    pub fn new(data: &'a CrosshairRendererData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn data(&self) -> &'a CrosshairRendererData {
        self.data
    }

    /// Appends one full-span line per visible crosshair line. The frame
    /// viewport is the pane area.
    pub fn draw(&self, frame: &mut RenderFrame) {
        let width = f64::from(frame.viewport.width);
        let height = f64::from(frame.viewport.height);
        let data = self.data;

        let vert = data.vert_line;
        if vert.visible && data.x.is_finite() && (0.0..=width).contains(&data.x) {
            let x = align_to_pixel(data.x, vert.line_width);
            frame.lines.push(
                LinePrimitive::new(x, 0.0, x, height, vert.line_width, vert.color)
                    .with_stroke_style(vert.line_style),
            );
        }

        let horz = data.horz_line;
        if horz.visible && data.y.is_finite() && (0.0..=height).contains(&data.y) {
            let y = align_to_pixel(data.y, horz.line_width);
            frame.lines.push(
                LinePrimitive::new(0.0, y, width, y, horz.line_width, horz.color)
                    .with_stroke_style(horz.line_style),
            );
        }
    }
}

/// Odd-width strokes sit on pixel centers so they stay crisp.
fn align_to_pixel(coordinate: f64, line_width: f64) -> f64 {
    let rounded = coordinate.round();
    if line_width.round() as i64 % 2 == 1 {
        rounded + 0.5
    } else {
        rounded
    }
}
