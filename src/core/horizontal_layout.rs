use serde::{Deserialize, Serialize};

use crate::core::text_metrics::label_width;
use crate::core::vertical_layout::BASELINE_PADDING_PX;
use crate::core::Slice;

/// Narrowest funnel kept once right-side labels have claimed their space.
pub const MIN_FUNNEL_WIDTH_PX: f64 = 100.0;

/// Horizontal extent of the funnel for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLayout {
    /// Width of a slice with `start_value == 1`.
    pub width: f64,
    /// Centering offset applied when the canvas is wider than tall.
    pub left_padding: f64,
    /// Space right of the funnel available to right-side labels.
    pub right_padding: f64,
}

impl HorizontalLayout {
    /// Fits the funnel into a square footprint of the canvas.
    ///
    /// `right_label_font_size` is `Some` only when right-side labels render; the
    /// widest overflowing label is then reserved on the right, with the funnel
    /// never narrower than [`MIN_FUNNEL_WIDTH_PX`].
    #[must_use]
    pub fn compute(
        canvas_width: f64,
        canvas_height: f64,
        slices: &[Slice],
        right_label_font_size: Option<f64>,
    ) -> Self {
        let mut width = (canvas_width.min(canvas_height) - BASELINE_PADDING_PX * 2.0).max(0.0);
        let mut right_padding = 0.0;

        if let Some(font_size) = right_label_font_size.filter(|size| *size > 0.0) {
            right_padding = calculate_right_padding(width, font_size, slices);
            width = (width - right_padding).max(MIN_FUNNEL_WIDTH_PX);
            right_padding = canvas_width - width;
        }

        let left_padding = if canvas_width > canvas_height {
            (canvas_width - canvas_height - BASELINE_PADDING_PX) / 2.0
        } else {
            0.0
        };

        Self {
            width,
            left_padding,
            right_padding,
        }
    }

    /// X offset centering a slice's top edge.
    #[must_use]
    pub fn horizontal_translate(&self, start_value: f64) -> f64 {
        self.left_padding + self.width / 2.0 - (self.width / 2.0) * start_value
    }
}

/// Widest label among slices whose shape plus label would overflow `width`.
///
/// Returns `0.0` when every slice fits.
#[must_use]
pub fn calculate_right_padding(width: f64, label_font_size: f64, slices: &[Slice]) -> f64 {
    slices.iter().fold(0.0, |widest, slice| {
        let label = label_width(label_font_size, &slice.label);
        let total = slice.start_value * width + label;
        if total > width && label > widest {
            label
        } else {
            widest
        }
    })
}
