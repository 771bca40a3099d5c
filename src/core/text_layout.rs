use serde::{Deserialize, Serialize};

use crate::core::Slice;
use crate::core::text_metrics::adjusted_label;

/// Which slices get a label or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    All,
    Marked,
    None,
}

impl RenderMode {
    /// Applies the mode to one slice, ignoring space constraints.
    #[must_use]
    pub fn admits(self, slice: &Slice) -> bool {
        match self {
            Self::All => true,
            Self::Marked => slice.is_marked,
            Self::None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Right,
    #[default]
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePosition {
    #[default]
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Per-render text toggles and font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextModes {
    pub render_labels: RenderMode,
    pub render_values: RenderMode,
    pub label_position: LabelPosition,
    pub values_position: ValuePosition,
    pub label_font_size: f64,
    pub value_font_size: f64,
}

impl TextModes {
    #[must_use]
    pub fn labels_inside(&self) -> bool {
        self.render_labels != RenderMode::None && self.label_position == LabelPosition::Inside
    }

    #[must_use]
    pub fn values_inside(&self) -> bool {
        self.render_values != RenderMode::None && self.values_position == ValuePosition::Inside
    }

    #[must_use]
    pub fn labels_right(&self) -> bool {
        self.render_labels != RenderMode::None && self.label_position == LabelPosition::Right
    }

    /// Height the inside text needs within one slot.
    #[must_use]
    pub fn labels_height_in_slice(&self) -> f64 {
        let mut height = 0.0;
        if self.labels_inside() {
            height += self.label_font_size;
        }
        if self.values_inside() {
            height += self.value_font_size;
        }
        height
    }

    /// Font size used to reserve right-side label space, if any.
    #[must_use]
    pub fn right_label_font_size(&self) -> Option<f64> {
        self.labels_right().then_some(self.label_font_size)
    }
}

/// Space text may occupy inside one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSlot {
    pub funnel_width: f64,
    pub right_padding: f64,
    /// Slot-relative y where text may start.
    pub start_height: f64,
    pub height: f64,
}

/// Resolved text node for one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub anchor: TextAnchor,
}

/// Places slice labels, inside or to the right of the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlanner {
    modes: TextModes,
    slot: TextSlot,
}

impl LabelPlanner {
    #[must_use]
    pub fn new(modes: TextModes, slot: TextSlot) -> Self {
        Self { modes, slot }
    }

    #[must_use]
    pub fn is_visible(&self, slice: &Slice) -> bool {
        if !self.modes.render_labels.admits(slice) {
            return false;
        }

        let size = self.modes.label_font_size;
        if size <= 0.0 {
            return false;
        }
        let required = match self.modes.label_position {
            LabelPosition::Right => size * 1.1,
            LabelPosition::Inside if self.modes.values_inside() => size * 2.2,
            LabelPosition::Inside => size * 1.2,
        };
        self.slot.height > required
    }

    #[must_use]
    pub fn text(&self, slice: &Slice) -> String {
        let width = self.slot.funnel_width;
        let available = match self.modes.label_position {
            LabelPosition::Right => {
                width + self.slot.right_padding - right_side_label_position(slice, width)
            }
            LabelPosition::Inside => {
                (slice.end_value + (slice.start_value - slice.end_value) / 3.0) * width
            }
        };
        adjusted_label(&slice.label, available, self.modes.label_font_size)
    }

    #[must_use]
    pub fn x(&self, slice: &Slice) -> f64 {
        match self.modes.label_position {
            LabelPosition::Inside => self.slot.funnel_width * slice.start_value / 2.0,
            LabelPosition::Right => right_side_label_position(slice, self.slot.funnel_width),
        }
    }

    /// Top of the label; shares the slot with an inside value when one renders.
    #[must_use]
    pub fn y(&self) -> f64 {
        let free = if self.modes.labels_inside() && self.modes.values_inside() {
            self.slot.height - self.modes.label_font_size - self.modes.value_font_size
        } else {
            self.slot.height - self.modes.label_font_size
        };
        self.slot.start_height + (free / 2.0).max(0.0)
    }

    #[must_use]
    pub fn position(&self) -> LabelPosition {
        self.modes.label_position
    }

    #[must_use]
    pub fn anchor(&self) -> TextAnchor {
        match self.modes.label_position {
            LabelPosition::Inside => TextAnchor::Middle,
            LabelPosition::Right => TextAnchor::Start,
        }
    }

    #[must_use]
    pub fn place(&self, slice: &Slice) -> TextPlacement {
        TextPlacement {
            text: self.text(slice),
            x: self.x(slice),
            y: self.y(),
            visible: self.is_visible(slice),
            anchor: self.anchor(),
        }
    }
}

/// Places slice values inside the shape, below an inside label when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuePlanner {
    modes: TextModes,
    slot: TextSlot,
    labels: LabelPlanner,
}

impl ValuePlanner {
    #[must_use]
    pub fn new(modes: TextModes, slot: TextSlot) -> Self {
        Self {
            modes,
            slot,
            labels: LabelPlanner::new(modes, slot),
        }
    }

    #[must_use]
    pub fn is_visible(&self, slice: &Slice) -> bool {
        let size = self.modes.value_font_size;
        size > 0.0 && self.modes.render_values.admits(slice) && self.slot.height > size
    }

    #[must_use]
    pub fn text(&self, slice: &Slice) -> String {
        adjusted_label(
            &slice.formatted_value,
            slice.end_value * self.slot.funnel_width,
            self.modes.value_font_size,
        )
    }

    #[must_use]
    pub fn x(&self, slice: &Slice) -> f64 {
        self.slot.funnel_width * slice.start_value / 2.0
    }

    #[must_use]
    pub fn y(&self, slice: &Slice) -> f64 {
        if self.modes.label_position == LabelPosition::Inside && self.labels.is_visible(slice) {
            return self.labels.y() + self.modes.label_font_size;
        }
        self.slot.start_height + ((self.slot.height - self.modes.value_font_size) / 2.0).max(0.0)
    }

    #[must_use]
    pub fn place(&self, slice: &Slice) -> TextPlacement {
        TextPlacement {
            text: self.text(slice),
            x: self.x(slice),
            y: self.y(slice),
            visible: self.is_visible(slice),
            anchor: TextAnchor::Middle,
        }
    }
}

/// Start of right-side text, biased towards the wider top edge.
#[must_use]
pub fn right_side_label_position(slice: &Slice, width: f64) -> f64 {
    let max_width = width * slice.start_value;
    let min_width = width * slice.end_value;
    max_width - (max_width - min_width) / 5.0 + 5.0
}
