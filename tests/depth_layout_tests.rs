use approx::assert_relative_eq;
use funnel_rs::FunnelSettings;
use funnel_rs::core::{DepthMetrics, DepthStyle, FunnelLayout, Point, Slice, VerticalLayout, Viewport};
use funnel_rs::scene::ElementAttributes;

fn slots(slice_height: f64, show_depth: bool) -> VerticalLayout {
    VerticalLayout {
        height: slice_height * 4.0,
        slice_height,
        show_depth,
        padding: 10.0,
        slice_count: 4,
    }
}

fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (point, (x, y)) in actual.iter().zip(expected) {
        assert_relative_eq!(point.x, *x, epsilon = 1e-9);
        assert_relative_eq!(point.y, *y, epsilon = 1e-9);
    }
}

#[test]
fn box_depth_caps_distance_and_shadow_by_slot_height() {
    let depth = DepthMetrics::compute(&slots(30.0, true), false, 8.0, 15.0, 3.0);

    assert_eq!(depth.style, DepthStyle::Box);
    assert_relative_eq!(depth.distance, 6.0);
    assert_relative_eq!(depth.shadow_height, 10.0);
    assert_relative_eq!(depth.box_shadow_height, 6.0);
    assert_relative_eq!(depth.start_height, 6.0);
    assert_relative_eq!(depth.label_start_height, 6.0);
    assert_relative_eq!(depth.label_slice_height, 24.0);
    assert_relative_eq!(depth.angle, 3.0);
}

#[test]
fn requested_depth_is_kept_when_the_slot_is_tall_enough() {
    let depth = DepthMetrics::compute(&slots(30.0, true), false, 3.0, 5.0, 3.0);

    assert_relative_eq!(depth.distance, 3.0);
    assert_relative_eq!(depth.shadow_height, 5.0);
    assert_relative_eq!(depth.box_shadow_height, 3.0);
    assert_relative_eq!(depth.label_slice_height, 27.0);
}

#[test]
fn box_shadow_follows_the_smaller_of_shadow_and_distance() {
    let depth = DepthMetrics::compute(&slots(30.0, true), false, 8.0, 4.0, 3.0);

    assert_relative_eq!(depth.distance, 6.0);
    assert_relative_eq!(depth.shadow_height, 4.0);
    assert_relative_eq!(depth.box_shadow_height, 4.0);
}

#[test]
fn rounded_depth_shifts_text_below_the_top_ellipse() {
    let depth = DepthMetrics::compute(&slots(30.0, true), true, 8.0, 15.0, 3.0);

    assert_eq!(depth.style, DepthStyle::Rounded);
    assert_relative_eq!(depth.start_height, 6.0);
    assert_relative_eq!(depth.label_start_height, 16.0);
    assert_relative_eq!(depth.label_slice_height, 19.0);
}

#[test]
fn flat_slots_give_text_the_whole_height() {
    let depth = DepthMetrics::compute(&slots(30.0, false), true, 8.0, 15.0, 3.0);

    assert_eq!(depth.style, DepthStyle::Flat);
    assert_relative_eq!(depth.start_height, 0.0);
    assert_relative_eq!(depth.label_start_height, 0.0);
    assert_relative_eq!(depth.label_slice_height, 30.0);
}

// 200x200 canvas, two slots: width 180, padding 20, slot height 80,
// distance 10, shadow 20, box shadow 10.
fn depth_settings(rounded: bool) -> FunnelSettings {
    FunnelSettings::new(Viewport::new(200, 200))
        .with_depth(20.0, 10.0, rounded)
        .with_angle(6.0)
}

fn targets(settings: &FunnelSettings) -> (ElementAttributes, ElementAttributes) {
    let slices = vec![
        Slice::new("narrow", 0.05, 0.05).with_color("#2ca02c"),
        Slice::new("wide", 1.0, 0.05).with_color("#1f77b4"),
    ];
    let layout = FunnelLayout::compute(&settings.layout_input(), &slices);
    assert_relative_eq!(layout.horizontal.width, 180.0);
    assert_relative_eq!(layout.depth.slice_height, 80.0);

    (
        ElementAttributes::target(&slices[0], 0, &layout, &settings.style),
        ElementAttributes::target(&slices[1], 1, &layout, &settings.style),
    )
}

#[test]
fn box_wall_insets_by_the_angle() {
    let (_, wide) = targets(&depth_settings(false));

    assert!(wide.depth_visible);
    assert!(!wide.ellipses_visible);
    assert_points(
        &wide.depth,
        &[(6.0, 0.0), (174.0, 0.0), (180.0, 10.0), (0.0, 10.0)],
    );
    assert_points(
        &wide.body,
        &[(0.0, 10.0), (180.0, 10.0), (90.0 + 4.5, 80.0), (85.5, 80.0)],
    );
}

#[test]
fn box_wall_on_a_narrow_slice_clamps_to_the_middle() {
    let (narrow, _) = targets(&depth_settings(false));

    assert_points(
        &narrow.depth,
        &[(4.5, 0.0), (4.5, 0.0), (9.0, 10.0), (0.0, 10.0)],
    );
}

#[test]
fn rounded_ellipses_use_the_start_and_end_widths() {
    let (_, wide) = targets(&depth_settings(true));

    assert!(wide.ellipses_visible);
    assert!(!wide.depth_visible);

    let top = wide.top_ellipse;
    assert_relative_eq!(top.center.x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(top.center.y, 10.0, epsilon = 1e-9);
    assert_relative_eq!(top.radius_x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(top.radius_y, 20.0, epsilon = 1e-9);

    let bottom = wide.bottom_ellipse;
    assert_relative_eq!(bottom.center.x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(bottom.center.y, 80.0, epsilon = 1e-9);
    assert_relative_eq!(bottom.radius_x, 4.5, epsilon = 1e-9);
    assert_relative_eq!(bottom.radius_y, 20.0, epsilon = 1e-9);
}
