use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BoundingBox, Point};
use crate::interaction::{PointerButton, PointerEvent};
use crate::render::{Color, RectPrimitive};

pub const DEFAULT_CLICK_THRESHOLD_PX: f64 = 4.0;

fn default_classes_to_mark() -> String {
    "funnel-slice".to_owned()
}

fn default_ignored_click_classes() -> Vec<String> {
    vec!["element".to_owned()]
}

fn default_center_marking() -> bool {
    true
}

fn default_click_threshold_px() -> f64 {
    DEFAULT_CLICK_THRESHOLD_PX
}

/// Which elements a drag can mark and how they are tested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkingConfig {
    #[serde(default = "default_classes_to_mark")]
    pub classes_to_mark: String,
    /// A click whose target sits inside any of these classes leaves marking alone.
    #[serde(default = "default_ignored_click_classes")]
    pub ignored_click_classes: Vec<String>,
    /// Centroid containment when `true`, full bounding-box containment otherwise.
    #[serde(default = "default_center_marking")]
    pub center_marking: bool,
    #[serde(default = "default_click_threshold_px")]
    pub click_threshold_px: f64,
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            classes_to_mark: default_classes_to_mark(),
            ignored_click_classes: default_ignored_click_classes(),
            center_marking: default_center_marking(),
            click_threshold_px: default_click_threshold_px(),
        }
    }
}

impl MarkingConfig {
    fn ignores_click_on(&self, class_path: &[&'static str]) -> bool {
        class_path.iter().any(|class| {
            self.ignored_click_classes
                .iter()
                .any(|ignored| ignored == class)
        })
    }

    fn selects(&self, selection: BoundingBox, element: BoundingBox) -> bool {
        if self.center_marking {
            selection.contains_point(element.center())
        } else {
            selection.contains_box(element)
        }
    }
}

/// What the engine needs to know about the scene it sits on.
pub trait MarkingSurface {
    type Item;

    /// Classes from the innermost shape under `point` outwards; empty over
    /// the background.
    fn class_path_at(&self, point: Point) -> SmallVec<[&'static str; 4]>;

    /// Screen-space boxes of every markable node carrying `class`.
    fn markable_boxes(&self, class: &str) -> Vec<(Self::Item, BoundingBox)>;
}

/// Receiver of marking decisions.
pub trait MarkingHandler<T> {
    fn clear_marking(&mut self);
    fn mark(&mut self, item: &T, ctrl_key: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureMode {
    #[default]
    Idle,
    Dragging,
}

/// Tells the host whether to route pointer moves and ups from outside the
/// root container to this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureChange {
    Acquire,
    Release,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkingOutcome {
    /// Pointer-up without a gesture in progress.
    NoGesture,
    /// Click on an element that handles its own clicks.
    InteractiveClick,
    Cleared,
    Marked(usize),
}

/// Drag rectangle state for the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRectangle {
    pub origin: Point,
    pub current: Point,
    pub active: bool,
}

impl SelectionRectangle {
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_corners(self.origin, self.current)
    }
}

/// Rectangular marking over one root container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectangularMarking {
    config: MarkingConfig,
    mode: GestureMode,
    rectangle: SelectionRectangle,
    first_target: SmallVec<[&'static str; 4]>,
}

impl RectangularMarking {
    #[must_use]
    pub fn new(config: MarkingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Applies a new configuration after a render. A gesture in progress
    /// survives so a re-render mid-drag does not drop it.
    pub fn install(&mut self, config: MarkingConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn config(&self) -> &MarkingConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode == GestureMode::Dragging
    }

    #[must_use]
    pub fn rectangle(&self) -> SelectionRectangle {
        self.rectangle
    }

    /// Starts a gesture, replacing any previous one. Secondary clicks are
    /// ignored.
    pub fn pointer_down<S: MarkingSurface>(
        &mut self,
        event: PointerEvent,
        surface: &S,
    ) -> CaptureChange {
        if event.button == PointerButton::Secondary {
            return CaptureChange::Unchanged;
        }

        let was_dragging = self.is_dragging();
        self.first_target = surface.class_path_at(event.position);
        self.rectangle = SelectionRectangle {
            origin: event.position,
            current: event.position,
            active: true,
        };
        self.mode = GestureMode::Dragging;
        trace!(x = event.position.x, y = event.position.y, "marking gesture started");

        if was_dragging {
            CaptureChange::Unchanged
        } else {
            CaptureChange::Acquire
        }
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        if self.is_dragging() {
            self.rectangle.current = event.position;
        }
    }

    /// Ends the gesture as a click or a drag. The modifier state is read from
    /// this event, not from the pointer-down.
    pub fn pointer_up<S, H>(
        &mut self,
        event: PointerEvent,
        surface: &S,
        handler: &mut H,
    ) -> (CaptureChange, MarkingOutcome)
    where
        S: MarkingSurface,
        H: MarkingHandler<S::Item> + ?Sized,
    {
        if !self.is_dragging() {
            return (CaptureChange::Unchanged, MarkingOutcome::NoGesture);
        }

        self.rectangle.current = event.position;
        self.rectangle.active = false;
        self.mode = GestureMode::Idle;
        let first_target = std::mem::take(&mut self.first_target);

        let dx = (event.position.x - self.rectangle.origin.x).abs();
        let dy = (event.position.y - self.rectangle.origin.y).abs();
        let threshold = self.config.click_threshold_px;

        let outcome = if dx < threshold && dy < threshold {
            if self.config.ignores_click_on(&first_target) {
                MarkingOutcome::InteractiveClick
            } else {
                handler.clear_marking();
                MarkingOutcome::Cleared
            }
        } else {
            let selection = self.rectangle.bounds();
            let hits: Vec<S::Item> = surface
                .markable_boxes(&self.config.classes_to_mark)
                .into_iter()
                .filter(|(_, element)| self.config.selects(selection, *element))
                .map(|(item, _)| item)
                .collect();

            if hits.is_empty() {
                handler.clear_marking();
                MarkingOutcome::Cleared
            } else {
                for item in &hits {
                    handler.mark(item, event.ctrl_key);
                }
                MarkingOutcome::Marked(hits.len())
            }
        };

        trace!(dx, dy, ?outcome, "marking gesture finished");
        (CaptureChange::Release, outcome)
    }

    /// The visible drag rectangle, if a gesture is in progress.
    #[must_use]
    pub fn overlay(&self, color: Color) -> Option<RectPrimitive> {
        self.rectangle.active.then(|| RectPrimitive {
            rect: self.rectangle.bounds(),
            fill: Color::rgba(color.red, color.green, color.blue, color.alpha * 0.1),
            border_color: color,
            border_width: 1.0,
        })
    }
}
