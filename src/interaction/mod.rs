//! Pointer handling: the rectangular marking gesture and hover tracking.

mod hover;
mod marking;
mod pointer;

pub use hover::{HoverChange, HoverState};
pub use marking::{
    CaptureChange, DEFAULT_CLICK_THRESHOLD_PX, GestureMode, MarkingConfig, MarkingHandler,
    MarkingOutcome, MarkingSurface, RectangularMarking, SelectionRectangle,
};
pub use pointer::{PointerButton, PointerEvent};
