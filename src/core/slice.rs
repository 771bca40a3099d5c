use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a slice across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceKey(String);

impl SliceKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SliceKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SliceKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One funnel stage.
///
/// `start_value` is the normalized width of the top edge and `end_value` the
/// width of the bottom edge. `0 <= end_value <= start_value <= 1` is expected
/// but not enforced; layout degrades to odd-looking geometry rather than
/// failing when it is violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub key: SliceKey,
    pub label: String,
    pub formatted_value: String,
    pub start_value: f64,
    pub end_value: f64,
    #[serde(default)]
    pub is_marked: bool,
    /// CSS hex color (`#rrggbb`).
    pub color: String,
}

impl Slice {
    #[must_use]
    pub fn new(key: impl Into<SliceKey>, start_value: f64, end_value: f64) -> Self {
        Self {
            key: key.into(),
            label: String::new(),
            formatted_value: String::new(),
            start_value,
            end_value,
            is_marked: false,
            color: "#000000".to_owned(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
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
