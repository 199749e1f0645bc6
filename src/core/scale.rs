//! Grade scale table
//!
//! The fixed nine-band grading scale used across the engine. Each band maps
//! an inclusive percentage-score range to a letter grade and a grade-point
//! value on the 0.0-4.0 scale.

/// One band of the grading scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Letter grade (e.g., "A", "B+")
    pub letter: &'static str,

    /// Lowest percentage score in the band (inclusive)
    pub min_score: f64,

    /// Highest percentage score in the band (inclusive)
    pub max_score: f64,

    /// Grade-point value awarded for the band
    pub points: f64,
}

/// The grading scale, ordered highest band first.
///
/// Integer scores 0..=100 are covered by exactly one band. Band edges are
/// integers, so non-integer scores inside the one-point gaps between bands
/// (e.g., 79.5) fall outside the scale.
pub const GRADE_SCALE: [GradeBand; 9] = [
    GradeBand { letter: "A", min_score: 80.0, max_score: 100.0, points: 4.0 },
    GradeBand { letter: "B+", min_score: 75.0, max_score: 79.0, points: 3.5 },
    GradeBand { letter: "B", min_score: 70.0, max_score: 74.0, points: 3.0 },
    GradeBand { letter: "C+", min_score: 65.0, max_score: 69.0, points: 2.5 },
    GradeBand { letter: "C", min_score: 60.0, max_score: 64.0, points: 2.0 },
    GradeBand { letter: "D+", min_score: 55.0, max_score: 59.0, points: 1.5 },
    GradeBand { letter: "D", min_score: 50.0, max_score: 54.0, points: 1.0 },
    GradeBand { letter: "E", min_score: 45.0, max_score: 49.0, points: 0.5 },
    GradeBand { letter: "F", min_score: 0.0, max_score: 44.0, points: 0.0 },
];

/// Convert a percentage score to grade points.
///
/// Returns `None` when `score` is not a finite number in `[0, 100]` or when
/// no band contains it.
#[must_use]
pub fn score_to_points(score: f64) -> Option<f64> {
    if !score.is_finite() || score < 0.0 || score > 100.0 {
        return None;
    }

    GRADE_SCALE
        .iter()
        .find(|band| score >= band.min_score && score <= band.max_score)
        .map(|band| band.points)
}

/// Convert a grade-point value to its letter grade.
///
/// Returns the letter of the band whose points exactly equal the input.
/// Values between bands have no letter and are formatted to one decimal
/// place instead, so this function never fails.
#[must_use]
pub fn points_to_letter(points: f64) -> String {
    GRADE_SCALE
        .iter()
        .find(|band| (band.points - points).abs() < f64::EPSILON)
        .map_or_else(|| format!("{points:.1}"), |band| band.letter.to_string())
}

/// Look up the grade points for a letter grade, case-insensitively.
#[must_use]
pub fn letter_to_points(letter: &str) -> Option<f64> {
    GRADE_SCALE
        .iter()
        .find(|band| band.letter.eq_ignore_ascii_case(letter))
        .map(|band| band.points)
}
