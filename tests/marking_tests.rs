use std::time::Duration;

use funnel_rs::{FunnelHost, FunnelSettings};
use funnel_rs::core::{FunnelLayout, Slice, SliceKey, Viewport};
use funnel_rs::interaction::{
    CaptureChange, MarkingConfig, MarkingOutcome, PointerButton, PointerEvent, RectangularMarking,
};
use funnel_rs::render::Color;
use funnel_rs::scene::{Scene, SyncParams};

#[derive(Debug, Default)]
struct Recorder {
    cleared: usize,
    marked: Vec<(SliceKey, bool)>,
}

impl FunnelHost for Recorder {
    fn mark(&mut self, key: &SliceKey, ctrl_key: bool) {
        self.marked.push((key.clone(), ctrl_key));
    }

    fn clear_marking(&mut self) {
        self.cleared += 1;
    }
}

fn slices() -> Vec<Slice> {
    vec![
        Slice::new("won", 0.4, 0.4).with_color("#2ca02c"),
        Slice::new("qualified", 0.7, 0.4).with_color("#ff7f0e"),
        Slice::new("leads", 1.0, 0.7).with_color("#1f77b4"),
    ]
}

/// 200x200 canvas. Body boxes: leads (0,10)-(180,70), qualified (27,70)-(153,130),
/// won (54,130)-(126,190).
fn scene_with(slices: &[Slice], animation_ms: u64) -> Scene {
    let settings =
        FunnelSettings::new(Viewport::new(200, 200)).with_animation_speed_ms(animation_ms);
    let layout = FunnelLayout::compute(&settings.layout_input(), slices);
    let mut scene = Scene::new();
    scene.sync(
        slices,
        SyncParams {
            layout: &layout,
            style: &settings.style,
            animation: settings.animation_duration(),
        },
    );
    scene
}

fn gesture(
    marking: &mut RectangularMarking,
    scene: &Scene,
    from: (f64, f64),
    to: (f64, f64),
    ctrl_key: bool,
) -> (Recorder, MarkingOutcome) {
    let mut recorder = Recorder::default();
    let down = marking.pointer_down(PointerEvent::new(from.0, from.1), scene);
    assert_eq!(down, CaptureChange::Acquire);
    marking.pointer_move(PointerEvent::new(to.0, to.1));
    let (up, outcome) = marking.pointer_up(
        PointerEvent::new(to.0, to.1).with_ctrl(ctrl_key),
        scene,
        &mut recorder,
    );
    assert_eq!(up, CaptureChange::Release);
    (recorder, outcome)
}

#[test]
fn small_displacement_on_a_slice_is_a_click() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (recorder, outcome) = gesture(&mut marking, &scene, (90.0, 40.0), (93.0, 43.0), false);

    assert_eq!(outcome, MarkingOutcome::InteractiveClick);
    assert_eq!(recorder.cleared, 0);
    assert!(recorder.marked.is_empty());
}

#[test]
fn displacement_past_the_threshold_is_a_drag() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (recorder, outcome) = gesture(&mut marking, &scene, (90.0, 40.0), (95.0, 45.0), false);

    assert_eq!(outcome, MarkingOutcome::Marked(1));
    assert_eq!(recorder.marked, vec![(SliceKey::from("leads"), false)]);
}

#[test]
fn movement_along_one_axis_only_is_still_a_drag() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    // Starts on a slice, so a click would be left to the slice itself.
    let (recorder, outcome) = gesture(&mut marking, &scene, (90.0, 12.0), (90.0, 198.0), false);

    assert_eq!(outcome, MarkingOutcome::Marked(3));
    assert_eq!(recorder.cleared, 0);
}

#[test]
fn background_click_clears_marking() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (recorder, outcome) = gesture(&mut marking, &scene, (195.0, 5.0), (197.0, 7.0), true);

    assert_eq!(outcome, MarkingOutcome::Cleared);
    assert_eq!(recorder.cleared, 1);
    assert!(recorder.marked.is_empty());
}

#[test]
fn drag_over_everything_marks_each_slice_with_the_release_modifier() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (recorder, outcome) = gesture(&mut marking, &scene, (0.0, 0.0), (200.0, 200.0), true);

    assert_eq!(outcome, MarkingOutcome::Marked(3));
    assert_eq!(recorder.cleared, 0);
    assert!(recorder.marked.iter().all(|(_, ctrl_key)| *ctrl_key));
}

#[test]
fn centroid_and_containment_modes_disagree_on_partial_overlap() {
    let scene = scene_with(&slices(), 0);

    let mut centroid = RectangularMarking::new(MarkingConfig::default());
    let (_, outcome) = gesture(&mut centroid, &scene, (50.0, 60.0), (200.0, 200.0), false);
    assert_eq!(outcome, MarkingOutcome::Marked(2));

    let mut containment = RectangularMarking::new(MarkingConfig {
        center_marking: false,
        ..MarkingConfig::default()
    });
    let (recorder, outcome) = gesture(&mut containment, &scene, (50.0, 60.0), (200.0, 200.0), false);
    assert_eq!(outcome, MarkingOutcome::Marked(1));
    assert_eq!(recorder.marked, vec![(SliceKey::from("won"), false)]);
}

#[test]
fn reversed_drag_direction_selects_the_same_box() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (_, outcome) = gesture(&mut marking, &scene, (200.0, 200.0), (50.0, 60.0), false);

    assert_eq!(outcome, MarkingOutcome::Marked(2));
}

#[test]
fn empty_drag_clears_marking() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    let (recorder, outcome) = gesture(&mut marking, &scene, (185.0, 150.0), (199.0, 199.0), false);

    assert_eq!(outcome, MarkingOutcome::Cleared);
    assert_eq!(recorder.cleared, 1);
}

#[test]
fn secondary_button_does_not_start_a_gesture() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());
    let mut recorder = Recorder::default();

    let down = marking.pointer_down(
        PointerEvent::new(0.0, 0.0).with_button(PointerButton::Secondary),
        &scene,
    );
    assert_eq!(down, CaptureChange::Unchanged);
    assert!(!marking.is_dragging());

    let (up, outcome) = marking.pointer_up(PointerEvent::new(200.0, 200.0), &scene, &mut recorder);
    assert_eq!(up, CaptureChange::Unchanged);
    assert_eq!(outcome, MarkingOutcome::NoGesture);
    assert_eq!(recorder.cleared, 0);
}

#[test]
fn a_new_pointer_down_replaces_the_gesture() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());

    marking.pointer_down(PointerEvent::new(0.0, 0.0), &scene);
    let again = marking.pointer_down(PointerEvent::new(100.0, 100.0), &scene);

    assert_eq!(again, CaptureChange::Unchanged);
    assert_eq!(marking.rectangle().origin.x, 100.0);
    assert_eq!(marking.rectangle().origin.y, 100.0);
}

#[test]
fn overlay_is_visible_only_while_dragging() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());
    let color = Color::from_rgb8(0x33, 0x33, 0x33);
    assert!(marking.overlay(color).is_none());

    marking.pointer_down(PointerEvent::new(10.0, 20.0), &scene);
    marking.pointer_move(PointerEvent::new(4.0, 60.0));
    let overlay = marking.overlay(color).expect("overlay while dragging");
    assert_eq!(overlay.rect.x, 4.0);
    assert_eq!(overlay.rect.y, 20.0);
    assert_eq!(overlay.rect.width, 6.0);
    assert_eq!(overlay.rect.height, 40.0);

    let mut recorder = Recorder::default();
    marking.pointer_up(PointerEvent::new(4.0, 60.0), &scene, &mut recorder);
    assert!(marking.overlay(color).is_none());
}

#[test]
fn install_keeps_a_gesture_in_progress() {
    let scene = scene_with(&slices(), 0);
    let mut marking = RectangularMarking::new(MarkingConfig::default());
    marking.pointer_down(PointerEvent::new(0.0, 0.0), &scene);

    marking.install(MarkingConfig {
        center_marking: false,
        ..MarkingConfig::default()
    });

    assert!(marking.is_dragging());
    assert!(!marking.config().center_marking);
}

#[test]
fn exiting_elements_are_not_markable() {
    let settings = FunnelSettings::new(Viewport::new(200, 200)).with_animation_speed_ms(400);
    let mut scene = scene_with(&slices(), 400);
    scene.advance(Duration::from_millis(400));

    let mut remaining = slices();
    remaining.remove(1);
    let layout = FunnelLayout::compute(&settings.layout_input(), &remaining);
    scene.sync(
        &remaining,
        SyncParams {
            layout: &layout,
            style: &settings.style,
            animation: settings.animation_duration(),
        },
    );

    let mut marking = RectangularMarking::new(MarkingConfig::default());
    let (recorder, outcome) = gesture(&mut marking, &scene, (0.0, 0.0), (200.0, 200.0), false);

    assert_eq!(outcome, MarkingOutcome::Marked(2));
    assert!(
        recorder
            .marked
            .iter()
            .all(|(key, _)| key.as_str() != "qualified")
    );
}
