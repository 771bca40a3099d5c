use serde::{Deserialize, Serialize};

use crate::core::VerticalLayout;

/// How the pseudo-3D wall under each slice is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthStyle {
    Flat,
    /// A lighter trapezoid above the slice.
    Box,
    /// A darkened ellipse pair at the top and bottom edges.
    Rounded,
}

/// Slot-relative measurements shared by the slice shapes and the text inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthMetrics {
    pub style: DepthStyle,
    pub slice_height: f64,
    /// Gap between a slice and its depth wall, capped at a fifth of the slot.
    pub distance: f64,
    /// Depth wall / ellipse radius, capped at a third of the slot.
    pub shadow_height: f64,
    pub box_shadow_height: f64,
    /// Where the slice's top edge starts within the slot.
    pub start_height: f64,
    pub label_start_height: f64,
    pub label_slice_height: f64,
    pub angle: f64,
}

impl DepthMetrics {
    #[must_use]
    pub fn compute(
        vertical: &VerticalLayout,
        rounded: bool,
        distance: f64,
        depth: f64,
        angle: f64,
    ) -> Self {
        let height = vertical.slice_height;
        let style = match (vertical.show_depth, rounded) {
            (false, _) => DepthStyle::Flat,
            (true, false) => DepthStyle::Box,
            (true, true) => DepthStyle::Rounded,
        };

        let distance = (height / 5.0).min(distance);
        let shadow_height = (height / 3.0).min(depth);
        let box_shadow_height = shadow_height.min(distance);

        let (start_height, label_start_height, label_slice_height) = match style {
            DepthStyle::Flat => (0.0, 0.0, height),
            DepthStyle::Box => (distance, distance, height - distance),
            // Ellipses grow below the slice, so text shifts down with them.
            DepthStyle::Rounded => {
                let label_start = distance + shadow_height;
                (
                    distance,
                    label_start,
                    height + shadow_height / 2.0 - label_start,
                )
            }
        };

        Self {
            style,
            slice_height: height,
            distance,
            shadow_height,
            box_shadow_height,
            start_height,
            label_start_height,
            label_slice_height,
            angle,
        }
    }
}
