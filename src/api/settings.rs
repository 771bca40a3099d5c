use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{LabelPosition, LayoutInput, RenderMode, TextModes, ValuePosition, Viewport};
use crate::error::{FunnelError, FunnelResult};
use crate::interaction::MarkingConfig;
use crate::render::FunnelStyle;

/// Everything a render call needs besides the slices.
///
/// Serializable so hosts can persist chart setup; every field has a default so
/// partial documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSettings {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Transition length in milliseconds; 0 applies changes immediately.
    #[serde(default)]
    pub animation_speed_ms: u64,
    #[serde(default)]
    pub show_depth: bool,
    #[serde(default)]
    pub rounded: bool,
    #[serde(default = "default_depth")]
    pub depth: f64,
    #[serde(default = "default_distance")]
    pub distance: f64,
    #[serde(default = "default_angle")]
    pub angle: f64,
    #[serde(default)]
    pub render_labels: RenderMode,
    #[serde(default)]
    pub render_values: RenderMode,
    #[serde(default)]
    pub label_position: LabelPosition,
    #[serde(default)]
    pub values_position: ValuePosition,
    #[serde(default)]
    pub style: FunnelStyle,
    #[serde(default)]
    pub marking: MarkingConfig,
}

impl Default for FunnelSettings {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            animation_speed_ms: 0,
            show_depth: false,
            rounded: false,
            depth: default_depth(),
            distance: default_distance(),
            angle: default_angle(),
            render_labels: RenderMode::All,
            render_values: RenderMode::All,
            label_position: LabelPosition::Inside,
            values_position: ValuePosition::Inside,
            style: FunnelStyle::default(),
            marking: MarkingConfig::default(),
        }
    }
}

impl FunnelSettings {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_animation_speed_ms(mut self, animation_speed_ms: u64) -> Self {
        self.animation_speed_ms = animation_speed_ms;
        self
    }

    /// Enables the depth extrusion; `rounded` picks ellipses over a box wall.
    #[must_use]
    pub fn with_depth(mut self, depth: f64, distance: f64, rounded: bool) -> Self {
        self.show_depth = true;
        self.depth = depth;
        self.distance = distance;
        self.rounded = rounded;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[must_use]
    pub fn with_render_labels(mut self, mode: RenderMode) -> Self {
        self.render_labels = mode;
        self
    }

    #[must_use]
    pub fn with_render_values(mut self, mode: RenderMode) -> Self {
        self.render_values = mode;
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: FunnelStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_marking(mut self, marking: MarkingConfig) -> Self {
        self.marking = marking;
        self
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_speed_ms)
    }

    #[must_use]
    pub fn text_modes(&self) -> TextModes {
        TextModes {
            render_labels: self.render_labels,
            render_values: self.render_values,
            label_position: self.label_position,
            values_position: self.values_position,
            label_font_size: self.style.label.size,
            value_font_size: self.style.value.size,
        }
    }

    #[must_use]
    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            viewport: self.viewport,
            show_depth: self.show_depth,
            rounded: self.rounded,
            depth: self.depth,
            distance: self.distance,
            angle: self.angle,
            text: self.text_modes(),
        }
    }

    /// Rejects numbers the layout cannot use. The viewport may be empty.
    pub fn validate(&self) -> FunnelResult<()> {
        for (name, value) in [
            ("depth", self.depth),
            ("distance", self.distance),
            ("angle", self.angle),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FunnelError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        let threshold = self.marking.click_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(FunnelError::InvalidData(
                "marking click threshold must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    /// Serializes settings to pretty JSON.
    pub fn to_json_pretty(&self) -> FunnelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FunnelError::InvalidData(format!("failed to serialize settings: {e}")))
    }

    /// Deserializes settings from JSON.
    pub fn from_json_str(input: &str) -> FunnelResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| FunnelError::InvalidData(format!("failed to parse settings: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(50, 50)
}

fn default_depth() -> f64 {
    5.0
}

fn default_distance() -> f64 {
    3.0
}

fn default_angle() -> f64 {
    3.0
}
