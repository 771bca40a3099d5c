use serde::{Deserialize, Serialize};

use crate::error::{FunnelError, FunnelResult};
use crate::render::{Color, FontSpec};

/// Font configuration for one kind of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size: f64,
    pub weight: String,
    pub style: String,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_owned(),
            size: 11.0,
            weight: "normal".to_owned(),
            style: "normal".to_owned(),
            color: Color::from_rgb8(0x33, 0x33, 0x33),
        }
    }
}

impl FontStyle {
    #[must_use]
    pub fn font_spec(&self) -> FontSpec {
        FontSpec {
            family: self.family.clone(),
            size_px: self.size,
            weight: self.weight.clone(),
            style: self.style.clone(),
        }
    }

    pub fn validate(&self, name: &str) -> FunnelResult<()> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(FunnelError::InvalidData(format!(
                "`{name}` font size must be finite and >= 0"
            )));
        }
        self.color.validate()
    }
}

/// Visual style for one render. Supplied whole by the host and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStyle {
    #[serde(default)]
    pub label: FontStyle,
    #[serde(default)]
    pub value: FontStyle,
    #[serde(default = "default_marking_color")]
    pub marking_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
}

impl Default for FunnelStyle {
    fn default() -> Self {
        Self {
            label: FontStyle::default(),
            value: FontStyle::default(),
            marking_color: default_marking_color(),
            background_color: default_background_color(),
        }
    }
}

impl FunnelStyle {
    pub fn validate(&self) -> FunnelResult<()> {
        self.label.validate("label")?;
        self.value.validate("value")?;
        self.marking_color.validate()?;
        self.background_color.validate()
    }
}

fn default_marking_color() -> Color {
    Color::from_rgb8(0x33, 0x33, 0x33)
}

fn default_background_color() -> Color {
    Color::WHITE
}
