//! Class names carried by scene nodes. Marking selectors and ignored-click
//! lists refer to these.

pub const ELEMENT: &str = "element";
pub const FUNNEL_DEPTH: &str = "funnel-depth";
pub const FUNNEL_SLICE: &str = "funnel-slice";
pub const ELLIPSE_TOP: &str = "ellipse-top";
pub const ELLIPSE_BOTTOM: &str = "ellipse-bottom";
pub const LABEL_VALUE: &str = "label-value";
pub const LABEL: &str = "label";
pub const DOT: &str = "dot";
pub const RECTANGLE: &str = "rectangle";
