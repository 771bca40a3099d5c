use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoundingBox, Point};
use crate::error::{FunnelError, FunnelResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS string: `transparent`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `transparent`, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(input: &str) -> FunnelResult<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let invalid = || FunnelError::InvalidColor(input.to_owned());
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (index, slot) in channels.iter_mut().enumerate() {
                    *slot = channel(index..index + 1)? * 17;
                }
                Ok(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let base = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                let alpha = if hex.len() == 8 {
                    f64::from(channel(6..8)?) / 255.0
                } else {
                    1.0
                };
                Ok(Self { alpha, ..base })
            }
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// CSS form; fully transparent colors become `transparent`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_transparent() {
            return "transparent".to_owned();
        }
        let [r, g, b, a] = [self.red, self.green, self.blue, self.alpha].map(to_byte);
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// WCAG relative luminance of the sRGB channels.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let linear = |channel: f64| {
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.red) + 0.7152 * linear(self.green) + 0.0722 * linear(self.blue)
    }

    /// Multiplies the color channels, leaving alpha alone.
    #[must_use]
    pub fn with_brightness(self, factor: f64) -> Self {
        Self {
            red: (self.red * factor).clamp(0.0, 1.0),
            green: (self.green * factor).clamp(0.0, 1.0),
            blue: (self.blue * factor).clamp(0.0, 1.0),
            alpha: self.alpha,
        }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }

    pub fn validate(self) -> FunnelResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FunnelError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = FunnelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css()
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn validate_opacity(opacity: f64) -> FunnelResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(FunnelError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

/// Closed, filled polygon in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: SmallVec<[Point; 4]>,
    pub fill: Color,
    pub opacity: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point>, fill: Color, opacity: f64) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill,
            opacity,
        }
    }

    /// SVG path data, `M x,y L x,y ... Z`.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for (index, point) in self.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command}{},{}", point.x, point.y));
        }
        if !data.is_empty() {
            data.push('Z');
        }
        data
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(FunnelError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePrimitive {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub fill: Color,
    pub opacity: f64,
}

impl EllipsePrimitive {
    pub fn validate(self) -> FunnelResult<()> {
        if !self.center.is_finite() {
            return Err(FunnelError::InvalidData(
                "ellipse center must be finite".to_owned(),
            ));
        }
        for radius in [self.radius_x, self.radius_y] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(FunnelError::InvalidData(
                    "ellipse radii must be finite and >= 0".to_owned(),
                ));
            }
        }
        validate_opacity(self.opacity)?;
        self.fill.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> FunnelResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0 {
            return Err(FunnelError::InvalidData(
                "circle geometry must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Axis-aligned rectangle with optional border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: BoundingBox,
    pub fill: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    pub fn validate(self) -> FunnelResult<()> {
        let BoundingBox {
            x,
            y,
            width,
            height,
        } = self.rect;
        if !x.is_finite() || !y.is_finite() || !width.is_finite() || !height.is_finite() {
            return Err(FunnelError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(FunnelError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Font selection carried by a text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub weight: String,
    pub style: String,
}

/// Draw command for one label. `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
    pub h_align: TextHAlign,
    pub opacity: f64,
}

impl TextPrimitive {
    pub fn validate(&self) -> FunnelResult<()> {
        if self.text.is_empty() {
            return Err(FunnelError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(FunnelError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font.size_px.is_finite() || self.font.size_px <= 0.0 {
            return Err(FunnelError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity)?;
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PathPrimitive};
    use crate::core::Point;

    #[test]
    fn parses_css_forms() {
        assert_eq!(Color::parse("#ff0000").expect("hex"), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::parse("#fff").expect("short hex"), Color::WHITE);
        assert!(Color::parse("transparent").expect("keyword").is_transparent());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("red").is_err());
    }

    #[test]
    fn css_round_trip_keeps_hex_form() {
        let color = Color::parse("#1f77b4").expect("hex");
        assert_eq!(color.to_css(), "#1f77b4");
        assert_eq!(Color::TRANSPARENT.to_css(), "transparent");
    }

    #[test]
    fn path_data_closes_polygon() {
        let path = PathPrimitive::new(
            [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 5.0)],
            Color::BLACK,
            1.0,
        );
        assert_eq!(path.to_path_data(), "M0,0L10,0L5,5Z");
    }
}
