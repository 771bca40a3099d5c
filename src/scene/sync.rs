use std::time::Duration;

use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::{FunnelLayout, Point, Slice, SliceKey, TextAnchor, Viewport};
use crate::render::{
    CirclePrimitive, Color, EllipsePrimitive, FunnelStyle, PathPrimitive, RenderFrame, Shape,
    TextHAlign, TextPrimitive,
};
use crate::scene::attributes::{DEPTH_OPACITY, DOT_RADIUS, TextAttributes};
use crate::scene::{ElementAttributes, SliceElement, classes};

/// Inputs of one sync pass besides the slices.
#[derive(Debug, Clone, Copy)]
pub struct SyncParams<'a> {
    pub layout: &'a FunnelLayout,
    pub style: &'a FunnelStyle,
    pub animation: Duration,
}

/// Keys touched by one sync pass, in list order for entered/updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub entered: Vec<SliceKey>,
    pub updated: Vec<SliceKey>,
    pub exited: Vec<SliceKey>,
}

impl SyncReport {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.entered.is_empty() && self.updated.is_empty() && self.exited.is_empty()
    }
}

/// Keyed set of realized slice elements.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: IndexMap<SliceKey, SliceElement>,
    /// Elements fading out under a key that has since re-entered.
    retired: Vec<SliceElement>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the realized elements with `slices` by key.
    pub fn sync(&mut self, slices: &[Slice], params: SyncParams<'_>) -> SyncReport {
        let mut report = SyncReport::default();
        let mut seen: IndexSet<&SliceKey> = IndexSet::with_capacity(slices.len());

        for (index, slice) in slices.iter().enumerate() {
            if !seen.insert(&slice.key) {
                warn!(key = %slice.key, index, "duplicate slice key, keeping the first");
                continue;
            }

            let target = ElementAttributes::target(slice, index, params.layout, params.style);
            let exiting = self.elements.get(&slice.key).map(SliceElement::is_exiting);
            match exiting {
                Some(false) => {
                    let Some(element) = self.elements.get_mut(&slice.key) else {
                        continue;
                    };
                    if element.retarget(slice.clone(), target, params.animation) {
                        trace!(key = %slice.key, "retargeted element");
                        report.updated.push(slice.key.clone());
                    }
                }
                Some(true) => {
                    // A key returning mid-exit starts over as a fresh enter.
                    if let Some(exiting) = self.elements.shift_remove(&slice.key) {
                        self.retired.push(exiting);
                    }
                    self.insert_entered(slice, target, params.animation, &mut report);
                }
                None => self.insert_entered(slice, target, params.animation, &mut report),
            }
        }

        let exit_duration = params.animation / 2;
        for (key, element) in &mut self.elements {
            if !seen.contains(key) && !element.is_exiting() {
                element.exit(exit_duration);
                report.exited.push(key.clone());
            }
        }
        self.prune();

        debug!(
            entered = report.entered.len(),
            updated = report.updated.len(),
            exited = report.exited.len(),
            show_depth = params.layout.vertical.show_depth,
            "scene synced"
        );
        report
    }

    fn insert_entered(
        &mut self,
        slice: &Slice,
        target: ElementAttributes,
        animation: Duration,
        report: &mut SyncReport,
    ) {
        let element = SliceElement::enter(slice.clone(), target, animation);
        self.elements.insert(slice.key.clone(), element);
        report.entered.push(slice.key.clone());
    }

    /// Steps every transition. Returns `true` while anything is still moving.
    pub fn advance(&mut self, delta: Duration) -> bool {
        for element in self.elements.values_mut().chain(self.retired.iter_mut()) {
            element.advance(delta);
        }
        self.prune();
        self.is_animating()
    }

    fn prune(&mut self) {
        self.elements.retain(|_, element| !element.is_removable());
        self.retired.retain(|element| !element.is_removable());
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.elements
            .values()
            .chain(self.retired.iter())
            .any(SliceElement::is_animating)
    }

    #[must_use]
    pub fn element(&self, key: &SliceKey) -> Option<&SliceElement> {
        self.elements.get(key)
    }

    /// Realized elements, including ones still fading out.
    pub fn elements(&self) -> impl Iterator<Item = &SliceElement> {
        self.elements.values().chain(self.retired.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len() + self.retired.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements bottom to top: exiting ones first, then live ones by ascending
    /// `start_value`, stable for ties.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&SliceElement> {
        let (mut exiting, mut live): (Vec<_>, Vec<_>) =
            self.elements().partition(|element| element.is_exiting());
        live.sort_by_key(|element| OrderedFloat(element.slice().start_value));
        exiting.extend(live);
        exiting
    }

    /// Materializes the current state into absolute-pixel draw commands.
    #[must_use]
    pub fn frame(&self, viewport: Viewport, background: Color, debug_markers: bool) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport, background);
        for element in self.paint_order() {
            push_element(&mut frame, element, debug_markers);
        }
        frame
    }
}

fn push_element(frame: &mut RenderFrame, element: &SliceElement, debug_markers: bool) {
    let attrs = element.current();
    let key = element.key();
    let origin = attrs.translate;
    let opacity = attrs.opacity;
    let place = |point: Point| point.translate(origin.x, origin.y);

    if attrs.depth_visible {
        frame.push(
            Some(key.clone()),
            classes::FUNNEL_DEPTH,
            Shape::Path(PathPrimitive::new(
                attrs.depth.iter().copied().map(place),
                attrs.fill,
                DEPTH_OPACITY * opacity,
            )),
        );
    }
    frame.push(
        Some(key.clone()),
        classes::FUNNEL_SLICE,
        Shape::Path(PathPrimitive::new(
            attrs.body.iter().copied().map(place),
            attrs.fill,
            opacity,
        )),
    );
    if attrs.ellipses_visible {
        for (class, ellipse) in [
            (classes::ELLIPSE_TOP, attrs.top_ellipse),
            (classes::ELLIPSE_BOTTOM, attrs.bottom_ellipse),
        ] {
            frame.push(
                Some(key.clone()),
                class,
                Shape::Ellipse(EllipsePrimitive {
                    center: place(ellipse.center),
                    radius_x: ellipse.radius_x,
                    radius_y: ellipse.radius_y,
                    fill: ellipse.fill,
                    opacity,
                }),
            );
        }
    }
    for (class, text) in [
        (classes::LABEL_VALUE, &attrs.value),
        (classes::LABEL, &attrs.label),
    ] {
        if text.visible && !text.text.is_empty() {
            frame.push(
                Some(key.clone()),
                class,
                Shape::Text(text_primitive(text, origin, opacity)),
            );
        }
    }
    if debug_markers {
        frame.push(
            Some(key.clone()),
            classes::DOT,
            Shape::Circle(CirclePrimitive {
                center: place(attrs.dot),
                radius: DOT_RADIUS,
                fill: Color::rgb(1.0, 0.0, 0.0),
            }),
        );
    }
}

fn text_primitive(text: &TextAttributes, origin: Point, opacity: f64) -> TextPrimitive {
    TextPrimitive {
        text: text.text.clone(),
        x: text.position.x + origin.x,
        y: text.position.y + origin.y,
        font: text.font.clone(),
        color: text.color,
        h_align: match text.anchor {
            TextAnchor::Start => TextHAlign::Left,
            TextAnchor::Middle => TextHAlign::Center,
        },
        opacity,
    }
}
