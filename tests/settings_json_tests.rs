use std::time::Duration;

use funnel_rs::core::{LabelPosition, RenderMode, Viewport};
use funnel_rs::interaction::MarkingConfig;
use funnel_rs::render::Color;
use funnel_rs::{FunnelError, FunnelSettings};

#[test]
fn defaults_match_the_host_integration() {
    let settings = FunnelSettings::default();

    assert_eq!(settings.viewport, Viewport::new(50, 50));
    assert_eq!(settings.animation_speed_ms, 0);
    assert!(!settings.show_depth);
    assert!(!settings.rounded);
    assert_eq!(settings.depth, 5.0);
    assert_eq!(settings.distance, 3.0);
    assert_eq!(settings.angle, 3.0);
    assert_eq!(settings.render_labels, RenderMode::All);
    assert_eq!(settings.label_position, LabelPosition::Inside);
    assert_eq!(settings.animation_duration(), Duration::ZERO);

    let marking = MarkingConfig::default();
    assert_eq!(marking.classes_to_mark, "funnel-slice");
    assert_eq!(marking.ignored_click_classes, vec!["element".to_owned()]);
    assert!(marking.center_marking);
    assert_eq!(marking.click_threshold_px, 4.0);
}

#[test]
fn settings_json_roundtrip() {
    let settings = FunnelSettings::new(Viewport::new(640, 480))
        .with_animation_speed_ms(300)
        .with_depth(12.0, 4.0, true)
        .with_render_values(RenderMode::Marked)
        .with_label_position(LabelPosition::Right);

    let json = settings.to_json_pretty().expect("serialize");
    let parsed = FunnelSettings::from_json_str(&json).expect("parse");

    assert_eq!(parsed, settings);
}

#[test]
fn partial_documents_fill_in_defaults() {
    let parsed = FunnelSettings::from_json_str(
        r#"{
            "viewport": { "width": 300, "height": 200 },
            "render_labels": "marked",
            "label_position": "right",
            "style": { "background_color": "transparent" }
        }"#,
    )
    .expect("parse");

    assert_eq!(parsed.viewport, Viewport::new(300, 200));
    assert_eq!(parsed.render_labels, RenderMode::Marked);
    assert_eq!(parsed.render_values, RenderMode::All);
    assert_eq!(parsed.label_position, LabelPosition::Right);
    assert!(parsed.style.background_color.is_transparent());
    assert_eq!(parsed.style.label.size, 11.0);
    assert_eq!(parsed.depth, 5.0);
}

#[test]
fn colors_serialize_as_css_strings() {
    let json = FunnelSettings::default().to_json_pretty().expect("serialize");

    assert!(json.contains(r##""background_color": "#ffffff""##));
    assert!(json.contains(r##""marking_color": "#333333""##));
}

#[test]
fn malformed_colors_are_rejected() {
    let err = FunnelSettings::from_json_str(r#"{ "style": { "marking_color": "red" } }"#)
        .expect_err("named colors are not supported");

    assert!(matches!(err, FunnelError::InvalidData(_)));
}

#[test]
fn negative_depth_fails_validation() {
    let mut settings = FunnelSettings::default();
    settings.depth = -1.0;

    assert!(matches!(
        settings.validate(),
        Err(FunnelError::InvalidData(_))
    ));
    assert!(FunnelSettings::default().validate().is_ok());
    assert_eq!(Color::parse("#fff").expect("white"), Color::WHITE);
}
