use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

/// Per-target label state: one record for the axis, one for the pane side.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxisViewRendererData {
    pub visible: bool,
    pub text: String,
    pub tick_visible: bool,
    /// Shift the text into the tick slot when the tick is hidden.
    pub move_text_to_invisible_tick: bool,
    pub border_color: Color,
}

impl Default for PriceAxisViewRendererData {
    fn default() -> Self {
        Self {
            visible: false,
            text: String::new(),
            tick_visible: true,
            move_text_to_invisible_tick: false,
            border_color: Color::TRANSPARENT,
        }
    }
}

/// Label state shared by the axis and pane renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceAxisViewRendererCommonData {
    pub background: Color,
    pub color: Color,
    pub coordinate: f64,
    /// Overrides `coordinate` when labels were moved apart to avoid overlap.
    pub fixed_coordinate: Option<f64>,
    pub additional_padding_top: f64,
    pub additional_padding_bottom: f64,
}

impl Default for PriceAxisViewRendererCommonData {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            color: Color::WHITE,
            coordinate: f64::NAN,
            fixed_coordinate: None,
            additional_padding_top: 0.0,
            additional_padding_bottom: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceAxisSide {
    Left,
    Right,
}

/// Label box metrics derived from the axis font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceAxisRendererOptions {
    pub font_size: f64,
    pub border_size: f64,
    pub tick_length: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub padding_inner: f64,
    pub padding_outer: f64,
}

impl PriceAxisRendererOptions {
    pub const TICK_LENGTH: f64 = 5.0;

    #[must_use]
    pub fn from_font_size(font_size: f64) -> Self {
        let tick_length = Self::TICK_LENGTH;
        Self {
            font_size,
            border_size: 1.0,
            tick_length,
            padding_top: 2.5 / 12.0 * font_size,
            padding_bottom: 2.5 / 12.0 * font_size,
            padding_inner: (font_size / 2.0 - tick_length / 2.0).ceil().max(0.0),
            padding_outer: (font_size / 2.0 + tick_length / 2.0).ceil(),
        }
    }
}

/// Read-only view over one price label's data.
#[derive(Debug, Clone, Copy)]
pub struct PriceAxisViewRenderer<'a> {
    data: &'a PriceAxisViewRendererData,
    common: &'a PriceAxisViewRendererCommonData,
}

impl<'a> PriceAxisViewRenderer<'a> {
    #[must_use]
    pub fn new(
        data: &'a PriceAxisViewRendererData,
        common: &'a PriceAxisViewRendererCommonData,
    ) -> Self {
        Self { data, common }
    }

    #[must_use]
    pub fn data(&self) -> &'a PriceAxisViewRendererData {
        self.data
    }

    #[must_use]
    pub fn common_data(&self) -> &'a PriceAxisViewRendererCommonData {
        self.common
    }

    /// Total label height including the additional paddings.
    #[must_use]
    pub fn height(&self, options: &PriceAxisRendererOptions) -> f64 {
        options.font_size
            + options.padding_top
            + options.padding_bottom
            + self.common.additional_padding_top
            + self.common.additional_padding_bottom
    }

    /// Appends the label box, tick and text. The frame viewport is the
    /// price axis area; `side` tells which chart edge the axis sits on.
    pub fn draw(
        &self,
        frame: &mut RenderFrame,
        options: &PriceAxisRendererOptions,
        side: PriceAxisSide,
    ) {
        let data = self.data;
        let common = self.common;
        if !data.visible || data.text.is_empty() {
            return;
        }
        let center_y = common.fixed_coordinate.unwrap_or(common.coordinate);
        if !center_y.is_finite() {
            return;
        }

        let axis_width = f64::from(frame.viewport.width);
        let text_width = estimate_text_width_px(&data.text, options.font_size);
        let tick_size = if data.tick_visible || !data.move_text_to_invisible_tick {
            options.tick_length
        } else {
            0.0
        };
        let box_width = (options.border_size
            + options.padding_inner
            + options.padding_outer
            + text_width
            + tick_size)
            .min(axis_width);
        let box_height = self.height(options);
        let box_top = center_y - box_height / 2.0;

        // Axis-local x grows away from the pane.
        let to_frame_x = |local: f64| match side {
            PriceAxisSide::Right => local,
            PriceAxisSide::Left => axis_width - local,
        };
        let box_left = match side {
            PriceAxisSide::Right => 0.0,
            PriceAxisSide::Left => axis_width - box_width,
        };
        frame.rects.push(RectPrimitive::new(
            box_left,
            box_top,
            box_width,
            box_height,
            common.background,
        ));

        if data.tick_visible {
            frame.lines.push(LinePrimitive::new(
                to_frame_x(0.0),
                center_y,
                to_frame_x(options.tick_length),
                center_y,
                1.0,
                common.color,
            ));
        }

        let text_x = to_frame_x(options.border_size + tick_size + options.padding_inner);
        let h_align = match side {
            PriceAxisSide::Right => TextHAlign::Left,
            PriceAxisSide::Left => TextHAlign::Right,
        };
        frame.texts.push(TextPrimitive::new(
            data.text.clone(),
            text_x,
            box_top + options.padding_top + common.additional_padding_top,
            options.font_size,
            common.color,
            h_align,
        ));
    }
}
