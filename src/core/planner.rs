//! Target-GPA planner
//!
//! Given current GPA statistics, a target cumulative GPA, and the credits
//! still to be taken, solves for the average grade-point performance
//! required over those remaining credits and reports whether it is
//! achievable on the 0.0-4.0 scale.

use crate::core::scale::points_to_letter;
use crate::core::summary::GpaSummary;

/// Outcome of a target-GPA planning run
///
/// Ephemeral, derived purely from a [`GpaSummary`] and the user's target
/// inputs; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningResult {
    /// The target cumulative GPA
    pub target_gpa: f64,

    /// Credits still to be taken
    pub remaining_credits: f64,

    /// Average grade points required over the remaining credits
    pub required_average_points: f64,

    /// Whether the required average falls within `[0.0, 4.0]`
    ///
    /// A negative required average (target already exceeded) is reported
    /// infeasible through the same range check as an average above 4.0;
    /// the two cases are not distinguished.
    pub feasible: bool,

    /// Letter grade for the required average, clamped into the scale
    pub suggested_letter: String,
}

/// Solve for the performance required to reach `target_gpa`.
///
/// Returns `None` when `target_gpa` is not a finite number in `[0, 4]` or
/// `remaining_credits` is not a finite number above zero. That is
/// insufficient input, not an error; callers simply render no plan.
#[must_use]
pub fn plan(current: &GpaSummary, target_gpa: f64, remaining_credits: f64) -> Option<PlanningResult> {
    if !target_gpa.is_finite() || !(0.0..=4.0).contains(&target_gpa) {
        return None;
    }
    if !remaining_credits.is_finite() || remaining_credits <= 0.0 {
        return None;
    }

    let total_credits = f64::from(current.total_credits) + remaining_credits;
    let required_weighted = target_gpa * total_credits - current.total_weighted_points;
    let required_average_points = required_weighted / remaining_credits;
    let feasible = (0.0..=4.0).contains(&required_average_points);
    let suggested_letter = points_to_letter(required_average_points.clamp(0.0, 4.0));

    Some(PlanningResult {
        target_gpa,
        remaining_credits,
        required_average_points,
        feasible,
        suggested_letter,
    })
}
