use tracing::warn;

use crate::core::{
    DepthStyle, FunnelLayout, LabelPosition, Point, Slice, TextAnchor, TextPlacement,
};
use crate::render::{Color, FontSpec, FunnelStyle, inside_text_color};

/// Opacity of the box-style depth wall.
pub const DEPTH_OPACITY: f64 = 0.7;
/// Brightness applied to the top ellipse of rounded depth.
pub const TOP_ELLIPSE_BRIGHTNESS: f64 = 0.5;
pub const DOT_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseAttributes {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub fill: Color,
}

impl EllipseAttributes {
    fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            center: self.center.lerp(target.center, t),
            radius_x: lerp(self.radius_x, target.radius_x, t),
            radius_y: lerp(self.radius_y, target.radius_y, t),
            fill: self.fill.lerp(target.fill, t),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    pub text: String,
    pub position: Point,
    pub visible: bool,
    pub anchor: TextAnchor,
    pub color: Color,
    pub font: FontSpec,
}

impl TextAttributes {
    fn new(placement: TextPlacement, color: Color, font: FontSpec) -> Self {
        Self {
            text: placement.text,
            position: Point::new(placement.x, placement.y),
            visible: placement.visible,
            anchor: placement.anchor,
            color,
            font,
        }
    }

    /// Discrete attributes snap to the target; position, size and color tween.
    fn lerp(&self, target: &Self, t: f64) -> Self {
        Self {
            position: self.position.lerp(target.position, t),
            color: self.color.lerp(target.color, t),
            font: FontSpec {
                size_px: lerp(self.font.size_px, target.font.size_px, t),
                ..target.font.clone()
            },
            ..target.clone()
        }
    }
}

/// Everything drawn for one slice, in slot-local coordinates plus a translation.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementAttributes {
    pub translate: Point,
    pub opacity: f64,
    pub fill: Color,
    pub body: [Point; 4],
    pub depth: [Point; 4],
    pub depth_visible: bool,
    pub top_ellipse: EllipseAttributes,
    pub bottom_ellipse: EllipseAttributes,
    pub ellipses_visible: bool,
    pub label: TextAttributes,
    pub value: TextAttributes,
    pub dot: Point,
}

impl ElementAttributes {
    /// End state of a slice at list position `index` for the given layout.
    #[must_use]
    pub fn target(slice: &Slice, index: usize, layout: &FunnelLayout, style: &FunnelStyle) -> Self {
        let (fill, text_fill) = match Color::parse(&slice.color) {
            Ok(fill) => (
                fill,
                inside_text_color(fill, style.label.color, style.background_color),
            ),
            Err(err) => {
                warn!(key = %slice.key, error = %err, "unparsable slice color, drawing black");
                (Color::BLACK, style.label.color)
            }
        };

        let depth = layout.depth;
        let width = layout.horizontal.width;
        let start = slice.start_value;
        let end = slice.end_value;
        let height = depth.slice_height;
        let top = depth.start_height;

        let max_width = start * width;
        let bottom_inset = (start - end) * width / 2.0;
        let body = [
            Point::new(0.0, top),
            Point::new(max_width, top),
            Point::new(bottom_inset + end * width, height),
            Point::new(bottom_inset, height),
        ];

        let wall_top = depth.distance - depth.box_shadow_height;
        let depth_wall = [
            Point::new(depth.angle.min(max_width / 2.0), wall_top),
            Point::new((max_width - depth.angle).max(max_width / 2.0), wall_top),
            Point::new(max_width, top),
            Point::new(0.0, top),
        ];

        let top_ellipse = EllipseAttributes {
            center: Point::new(max_width / 2.0, top),
            radius_x: (max_width / 2.0).max(0.0),
            radius_y: depth.shadow_height.max(0.0),
            fill: fill.with_brightness(TOP_ELLIPSE_BRIGHTNESS),
        };
        let bottom_ellipse = EllipseAttributes {
            center: Point::new(max_width / 2.0, height),
            radius_x: (width * end / 2.0).max(0.0),
            radius_y: depth.shadow_height.max(0.0),
            fill,
        };

        let label_color = match layout.labels.position() {
            LabelPosition::Inside => text_fill,
            LabelPosition::Right => style.label.color,
        };
        let label = TextAttributes::new(
            layout.labels.place(slice),
            label_color,
            style.label.font_spec(),
        );
        let value = TextAttributes::new(layout.values.place(slice), text_fill, style.value.font_spec());

        let (x, y) = layout.slot_origin(index, slice);

        Self {
            translate: Point::new(x, y),
            opacity: 1.0,
            fill,
            body,
            depth: depth_wall,
            depth_visible: depth.style == DepthStyle::Box,
            top_ellipse,
            bottom_ellipse,
            ellipses_visible: depth.style == DepthStyle::Rounded,
            label,
            value,
            dot: Point::new(max_width / 2.0, depth.label_start_height),
        }
    }

    #[must_use]
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            opacity,
            ..self.clone()
        }
    }

    /// State at eased progress `t` between `self` and `target`.
    #[must_use]
    pub fn lerp(&self, target: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return target.clone();
        }
        Self {
            translate: self.translate.lerp(target.translate, t),
            opacity: lerp(self.opacity, target.opacity, t).clamp(0.0, 1.0),
            fill: self.fill.lerp(target.fill, t),
            body: lerp_points(&self.body, &target.body, t),
            depth: lerp_points(&self.depth, &target.depth, t),
            depth_visible: target.depth_visible,
            top_ellipse: self.top_ellipse.lerp(target.top_ellipse, t),
            bottom_ellipse: self.bottom_ellipse.lerp(target.bottom_ellipse, t),
            ellipses_visible: target.ellipses_visible,
            label: self.label.lerp(&target.label, t),
            value: self.value.lerp(&target.value, t),
            dot: self.dot.lerp(target.dot, t),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_points(from: &[Point; 4], to: &[Point; 4], t: f64) -> [Point; 4] {
    std::array::from_fn(|index| from[index].lerp(to[index], t))
}
