use serde::{Deserialize, Serialize};

use crate::core::{
    DepthMetrics, HorizontalLayout, LabelPlanner, Slice, TextModes, TextSlot, ValuePlanner,
    VerticalLayout, VerticalLayoutOptions, Viewport,
};

/// Everything the layout engine needs besides the slices themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub viewport: Viewport,
    pub show_depth: bool,
    pub rounded: bool,
    pub depth: f64,
    pub distance: f64,
    pub angle: f64,
    pub text: TextModes,
}

/// Complete layout for one render pass. Recomputed from scratch every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelLayout {
    pub vertical: VerticalLayout,
    pub horizontal: HorizontalLayout,
    pub depth: DepthMetrics,
    pub labels: LabelPlanner,
    pub values: ValuePlanner,
}

impl FunnelLayout {
    #[must_use]
    pub fn compute(input: &LayoutInput, slices: &[Slice]) -> Self {
        let vertical = VerticalLayout::compute(
            input.viewport.height_px(),
            slices.len(),
            VerticalLayoutOptions {
                show_depth: input.show_depth,
                distance: input.distance,
                depth: input.depth,
                labels_height: input.text.labels_height_in_slice(),
            },
        );
        let horizontal = HorizontalLayout::compute(
            input.viewport.width_px(),
            input.viewport.height_px(),
            slices,
            input.text.right_label_font_size(),
        );
        let depth = DepthMetrics::compute(
            &vertical,
            input.rounded,
            input.distance,
            input.depth,
            input.angle,
        );
        let slot = TextSlot {
            funnel_width: horizontal.width,
            right_padding: horizontal.right_padding,
            start_height: depth.label_start_height,
            height: depth.label_slice_height,
        };

        Self {
            vertical,
            horizontal,
            depth,
            labels: LabelPlanner::new(input.text, slot),
            values: ValuePlanner::new(input.text, slot),
        }
    }

    /// Translation of the slot holding `slice` at list position `index`.
    #[must_use]
    pub fn slot_origin(&self, index: usize, slice: &Slice) -> (f64, f64) {
        (
            self.horizontal.horizontal_translate(slice.start_value),
            self.vertical.vertical_translate(index),
        )
    }
}
