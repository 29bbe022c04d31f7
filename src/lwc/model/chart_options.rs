use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{CrosshairOptions, PriceScaleOptions, TimeScaleOptions};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub background_color: Color,
    pub text_color: Color,
    /// Axis label font size in pixels.
    pub font_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            text_color: Color::from_rgb8(0x19, 0x19, 0x19),
            font_size: 12.0,
        }
    }
}

/// Chart-wide options shared by every pane and view.
///
/// Serializable so host applications can persist and load chart setup; every
/// field has a default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub layout: LayoutOptions,
    pub crosshair: CrosshairOptions,
    pub time_scale: TimeScaleOptions,
    pub left_price_scale: PriceScaleOptions,
    pub right_price_scale: PriceScaleOptions,
}

impl ChartOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.layout.font_size.is_finite() || self.layout.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "layout font size must be finite and > 0".to_owned(),
            ));
        }
        for (name, line) in [
            ("vert_line", &self.crosshair.vert_line),
            ("horz_line", &self.crosshair.horz_line),
        ] {
            if !line.width.is_finite() || line.width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "crosshair {name} width must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
