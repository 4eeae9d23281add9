//! Compile-time tunables bundled into one value.
//!
//! Nothing here is user-facing; the struct exists so the sketch receives its
//! constants explicitly and tests can vary them.

use crate::constants::*;
use crate::error::SketchError;
use crate::palette::Hsb;

/// Font settings used for every label, both on the pixel layer and the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size_px: f32,
}

impl TextStyle {
    /// CSS shorthand accepted by `CanvasRenderingContext2D.font`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: FONT_FAMILY.to_string(),
            size_px: FONT_SIZE_PX,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SketchConfig {
    pub words: Vec<String>,
    pub point_count: usize,
    pub initial_radius_fraction: f32,
    pub easing: f32,
    pub inset_fraction: f32,
    pub inward_damping: f32,
    pub inward_floor: f32,
    pub edge_width: f32,
    pub blur_amount: f32,
    pub time_per_frame: f32,
    pub color_start: Hsb,
    pub color_end: Hsb,
    pub text_style: TextStyle,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| w.to_string()).collect(),
            point_count: POINT_COUNT,
            initial_radius_fraction: INITIAL_RADIUS_FRACTION,
            easing: EASING,
            inset_fraction: INSET_FRACTION,
            inward_damping: INWARD_DAMPING,
            inward_floor: INWARD_FLOOR,
            edge_width: EDGE_WIDTH,
            blur_amount: BLUR_AMOUNT,
            time_per_frame: TIME_PER_FRAME,
            color_start: Hsb::from_array(COLOR_START_HSB),
            color_end: Hsb::from_array(COLOR_END_HSB),
            text_style: TextStyle::default(),
        }
    }
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.words.is_empty() {
            return Err(SketchError::EmptyWordList);
        }
        if self.point_count < 3 {
            return Err(SketchError::TooFewPoints(self.point_count));
        }
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(SketchError::EasingOutOfRange(self.easing));
        }
        if !(0.0..0.5).contains(&self.inset_fraction) {
            return Err(SketchError::InsetOutOfRange(self.inset_fraction));
        }
        Ok(())
    }
}
