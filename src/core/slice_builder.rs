use serde::{Deserialize, Serialize};

use crate::core::{Slice, SliceKey};
use crate::error::{FunnelError, FunnelResult};

/// Row limit applied unless the host overrides it.
pub const DEFAULT_SLICE_LIMIT: usize = 2000;

/// Raw funnel stage as delivered by the host, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub key: SliceKey,
    pub label: String,
    pub value: f64,
    pub formatted_value: String,
    pub color: String,
    #[serde(default)]
    pub is_marked: bool,
}

impl FunnelStage {
    #[must_use]
    pub fn new(key: impl Into<SliceKey>, label: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
            formatted_value: format!("{value}"),
            color: "#000000".to_owned(),
            is_marked: false,
        }
    }

    #[must_use]
    pub fn with_formatted_value(mut self, formatted_value: impl Into<String>) -> Self {
        self.formatted_value = formatted_value.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_marked(mut self, is_marked: bool) -> Self {
        self.is_marked = is_marked;
        self
    }
}

/// How the per-slice value text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Keep the host's formatted value.
    #[default]
    Formatted,
    /// Share of the largest stage, three significant digits.
    Percent,
}

/// Normalizes host-ordered stages into the slice list consumed by the renderer.
///
/// Stages are given top of the funnel first and are never re-ordered; the
/// result is bottom-up (index 0 is the bottom slice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceBuilder {
    value_format: ValueFormat,
    limit: usize,
}

impl Default for SliceBuilder {
    fn default() -> Self {
        Self {
            value_format: ValueFormat::default(),
            limit: DEFAULT_SLICE_LIMIT,
        }
    }
}

impl SliceBuilder {
    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(&self, stages: &[FunnelStage]) -> FunnelResult<Vec<Slice>> {
        if stages.len() > self.limit {
            return Err(FunnelError::TooManySlices {
                count: stages.len(),
                limit: self.limit,
            });
        }

        let max_value = stages
            .iter()
            .map(|stage| finite_or_zero(stage.value))
            .fold(0.0_f64, f64::max);
        let normalize = |value: f64| {
            if max_value > 0.0 {
                finite_or_zero(value) / max_value
            } else {
                0.0
            }
        };

        let mut slices: Vec<Slice> = stages
            .iter()
            .enumerate()
            .map(|(index, stage)| {
                let start_value = normalize(stage.value);
                let end_value = stages
                    .get(index + 1)
                    .map_or(start_value, |next| normalize(next.value));
                let formatted_value = match self.value_format {
                    ValueFormat::Formatted => stage.formatted_value.clone(),
                    ValueFormat::Percent => format_percent(start_value),
                };

                Slice {
                    key: stage.key.clone(),
                    label: stage.label.clone(),
                    formatted_value,
                    start_value,
                    end_value,
                    is_marked: stage.is_marked,
                    color: stage.color.clone(),
                }
            })
            .collect();
        slices.reverse();
        Ok(slices)
    }
}

/// Formats a `[0, 1]` share as a percentage with three significant digits and
/// no trailing zeros (`0.33333 -> "33.3%"`, `1.0 -> "100%"`).
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if percent == 0.0 || !percent.is_finite() {
        return "0%".to_owned();
    }

    let magnitude = percent.abs().log10().floor() as i32;
    let decimals = 2 - magnitude;
    let rounded = if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (percent * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (percent / factor).round() * factor
    };
    format!("{rounded}%")
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::format_percent;

    #[test]
    fn percent_keeps_three_significant_digits() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
        assert_eq!(format_percent(0.055555), "5.56%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
