//! Incremental scene sync: keyed slice elements that enter, update and exit
//! with eased transitions, plus hit testing against what is on screen.

mod attributes;
pub mod classes;
mod element;
mod sync;
mod transition;

pub use attributes::{ElementAttributes, EllipseAttributes, TextAttributes};
pub use element::{ElementPhase, SliceElement};
pub use hit_test::{point_in_ellipse, point_in_polygon, text_box};
pub use sync::{Scene, SyncParams, SyncReport};
pub use transition::{Transition, ease_cubic_in_out};
