use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

/// Draw-time state of one time axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisViewRendererData {
    pub visible: bool,
    pub background: Color,
    pub color: Color,
    pub text: String,
    /// Width of the whole time axis, used to keep the label on screen.
    pub width: f64,
    pub coordinate: f64,
    pub tick_visible: bool,
}

impl Default for TimeAxisViewRendererData {
    fn default() -> Self {
        Self {
            visible: false,
            background: Color::from_rgb8(0x4c, 0x52, 0x5e),
            color: Color::WHITE,
            text: String::new(),
            width: 0.0,
            coordinate: f64::NAN,
            tick_visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxisRendererOptions {
    pub font_size: f64,
    pub border_size: f64,
    pub tick_length: f64,
    pub padding_horizontal: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl TimeAxisRendererOptions {
    #[must_use]
    pub fn from_font_size(font_size: f64) -> Self {
        Self {
            font_size,
            border_size: 1.0,
            tick_length: 5.0,
            padding_horizontal: 9.0 / 12.0 * font_size,
            padding_top: 3.0 / 12.0 * font_size,
            padding_bottom: 3.0 / 12.0 * font_size,
        }
    }

    #[must_use]
    pub fn label_height(&self) -> f64 {
        self.border_size
            + self.tick_length
            + self.padding_top
            + self.font_size
            + self.padding_bottom
    }
}

/// Read-only view over time label data owned by a time axis view.
#[derive(Debug, Clone, Copy)]
pub struct TimeAxisViewRenderer<'a> {
    data: &'a TimeAxisViewRendererData,
}

impl<'a> TimeAxisViewRenderer<'a> {
    #[must_use]
    pub fn new(data: &'a TimeAxisViewRendererData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn data(&self) -> &'a TimeAxisViewRendererData {
        self.data
    }

    /// Appends the label box, tick and centered text. The box is clamped
    /// horizontally into `[0, data.width]`.
    pub fn draw(&self, frame: &mut RenderFrame, options: &TimeAxisRendererOptions) {
        let data = self.data;
        if !data.visible || data.text.is_empty() || !data.coordinate.is_finite() {
            return;
        }

        let text_width = estimate_text_width_px(&data.text, options.font_size);
        let label_width = text_width + 2.0 * options.padding_horizontal;
        let mut left = data.coordinate - label_width / 2.0;
        if left + label_width > data.width {
            left = data.width - label_width;
        }
        left = left.max(0.0);

        frame.rects.push(RectPrimitive::new(
            left,
            0.0,
            label_width,
            options.label_height(),
            data.background,
        ));

        if data.tick_visible {
            let tick_x = data.coordinate.round() + 0.5;
            frame.lines.push(LinePrimitive::new(
                tick_x,
                options.border_size,
                tick_x,
                options.border_size + options.tick_length,
                1.0,
                data.color,
            ));
        }

        frame.texts.push(TextPrimitive::new(
            data.text.clone(),
            left + label_width / 2.0,
            options.border_size + options.tick_length + options.padding_top,
            options.font_size,
            data.color,
            TextHAlign::Center,
        ));
    }
}
