//! Grade input normalizer
//!
//! Turns a raw user-supplied grade token into a canonical grade-point value.
//! Accepted forms, tried in order:
//! 1. a letter grade from the scale ("A", "b+", ...), case-insensitive;
//! 2. a number up to 4.0, taken directly as grade points ("3.7");
//! 3. a number above 4.0, taken as a percentage score and mapped through the
//!    grade scale ("85").

use crate::core::scale;

/// Parse a raw grade token into grade points.
///
/// Returns `None` for blank input, unparseable tokens, negative point
/// values, and percentage scores outside the scale.
///
/// The 4.0 boundary between the points and percentage interpretations is
/// intentional legacy behavior: a numeric value of at most 4.0 is always
/// read as grade points, so "3" means 3.0 points and can never mean a
/// 3% score.
#[must_use]
pub fn parse_grade_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(points) = scale::letter_to_points(trimmed) {
        return Some(points);
    }

    let value: f64 = trimmed.parse().ok()?;
    if value.is_nan() {
        return None;
    }

    if value <= 4.0 {
        if value < 0.0 {
            return None;
        }
        return Some(value);
    }

    scale::score_to_points(value)
}
