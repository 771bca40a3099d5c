use serde::{Deserialize, Serialize};

/// Padding applied above and below the stack when depth is off.
pub const BASELINE_PADDING_PX: f64 = 10.0;

/// Inside-text height assumed when the caller does not provide one.
pub const DEFAULT_LABELS_HEIGHT_PX: f64 = 11.0;

/// Vertical inputs. `distance` does not influence padding; it is carried so the
/// full depth request travels together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalLayoutOptions {
    pub show_depth: bool,
    pub distance: f64,
    pub depth: f64,
    pub labels_height: f64,
}

impl Default for VerticalLayoutOptions {
    fn default() -> Self {
        Self {
            show_depth: false,
            distance: 0.0,
            depth: 0.0,
            labels_height: DEFAULT_LABELS_HEIGHT_PX,
        }
    }
}

/// Vertical slot geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalLayout {
    /// Drawable height between top and bottom padding.
    pub height: f64,
    pub slice_height: f64,
    /// Effective depth flag; may be `false` even when depth was requested.
    pub show_depth: bool,
    pub padding: f64,
    pub slice_count: usize,
}

impl VerticalLayout {
    /// Splits the canvas height into equal slots.
    ///
    /// Depth is dropped, and the slots recomputed with the baseline padding,
    /// when a slot would be shorter than the inside text plus two pixels.
    /// The downgrade happens at most once.
    #[must_use]
    pub fn compute(canvas_height: f64, slice_count: usize, options: VerticalLayoutOptions) -> Self {
        let mut show_depth = options.show_depth;
        let mut layout = Self::slots(canvas_height, slice_count, show_depth, options.depth);

        if layout.slice_height < options.labels_height + 2.0 {
            show_depth = false;
            layout = Self::slots(canvas_height, slice_count, show_depth, options.depth);
        }

        Self {
            show_depth,
            ..layout
        }
    }

    fn slots(canvas_height: f64, slice_count: usize, show_depth: bool, depth: f64) -> Self {
        let padding = if show_depth {
            depth.max(BASELINE_PADDING_PX)
        } else {
            BASELINE_PADDING_PX
        };
        let height = (canvas_height - padding * 2.0).max(0.0);
        let slice_height = if slice_count == 0 {
            0.0
        } else {
            height / slice_count as f64
        };

        Self {
            height,
            slice_height,
            show_depth,
            padding,
            slice_count,
        }
    }

    /// Y offset of slot `index`; index 0 sits at the bottom of the stack.
    #[must_use]
    pub fn vertical_translate(&self, index: usize) -> f64 {
        self.padding + self.height - (index as f64 + 1.0) * self.slice_height
    }
}
