//! Layout engine: stateless arithmetic turning slices and style parameters
//! into pixel geometry.

pub mod depth;
pub mod funnel_layout;
pub mod horizontal_layout;
pub mod slice;
pub mod slice_builder;
pub mod text_layout;
pub mod text_metrics;
pub mod types;
pub mod vertical_layout;

pub use depth::{DepthMetrics, DepthStyle};
pub use funnel_layout::{FunnelLayout, LayoutInput};
pub use horizontal_layout::{HorizontalLayout, MIN_FUNNEL_WIDTH_PX, calculate_right_padding};
pub use slice::{Slice, SliceKey};
pub use slice_builder::{DEFAULT_SLICE_LIMIT, FunnelStage, SliceBuilder, ValueFormat, format_percent};
pub use text_layout::{
    LabelPlanner, LabelPosition, RenderMode, TextAnchor, TextModes, TextPlacement, TextSlot,
    ValuePlanner, ValuePosition, right_side_label_position,
};
pub use text_metrics::{adjusted_label, label_width};
pub use types::{BoundingBox, Point, Viewport};
pub use vertical_layout::{
    BASELINE_PADDING_PX, DEFAULT_LABELS_HEIGHT_PX, VerticalLayout, VerticalLayoutOptions,
};
