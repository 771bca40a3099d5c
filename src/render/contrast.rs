//! WCAG contrast helpers used to pick inside-text colors.

use crate::render::Color;

/// Minimum label/fill contrast ratio for keeping the configured label color.
pub const INSIDE_TEXT_MIN_CONTRAST: f64 = 1.7;

/// `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter of the two.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Color for text drawn on top of a slice.
///
/// A transparent background always keeps the label color. Otherwise the label
/// color is kept when it contrasts enough with the fill, and the background
/// color is used instead when it does not.
#[must_use]
pub fn inside_text_color(fill: Color, label: Color, background: Color) -> Color {
    if background.is_transparent() {
        return label;
    }
    if contrast_ratio(fill, label) > INSIDE_TEXT_MIN_CONTRAST {
        label
    } else {
        background
    }
}
