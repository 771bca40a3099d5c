//! Heuristic text measurement.
//!
//! Two average glyph widths are used on purpose: the wider one when deciding
//! whether a label overflows the funnel, the narrower one when truncating.

/// Glyph width, as a fraction of font size, for overflow checks.
pub const OVERFLOW_CHAR_WIDTH_RATIO: f64 = 0.8;
/// Glyph width, as a fraction of font size, for truncation.
pub const TRUNCATION_CHAR_WIDTH_RATIO: f64 = 0.75;
pub const ELLIPSIS: char = '\u{2026}';

/// Estimated pixel width of `text` at `font_size`.
#[must_use]
pub fn label_width(font_size: f64, text: &str) -> f64 {
    text.chars().count() as f64 * font_size * OVERFLOW_CHAR_WIDTH_RATIO
}

/// Shortens `text` with an ellipsis so it fits `available_width`.
///
/// Returns an empty string when fewer than two characters would fit.
#[must_use]
pub fn adjusted_label(text: &str, available_width: f64, font_size: f64) -> String {
    let char_width = font_size * TRUNCATION_CHAR_WIDTH_RATIO;
    let max_characters = available_width / char_width;
    let length = text.chars().count();

    if (length as f64) <= max_characters || max_characters.is_nan() {
        return text.to_owned();
    }
    if max_characters < 2.0 {
        return String::new();
    }

    let keep = (max_characters - 2.0).max(1.0).floor() as usize;
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::{adjusted_label, label_width};

    #[test]
    fn label_width_scales_with_character_count() {
        assert!((label_width(10.0, "hello") - 40.0).abs() <= 1e-9);
        assert_eq!(label_width(10.0, ""), 0.0);
    }

    #[test]
    fn truncation_keeps_room_for_ellipsis() {
        // 75px at 10px font fits 10 characters.
        assert_eq!(adjusted_label("conversion", 75.0, 10.0), "conversion");
        assert_eq!(adjusted_label("conversions", 75.0, 10.0), "conversi\u{2026}");
        assert_eq!(adjusted_label("conversions", 10.0, 10.0), "");
    }
}
