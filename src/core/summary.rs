//! Credit-weighted GPA aggregation
//!
//! Folds a collection of course records into total credits, total weighted
//! grade points, and the overall GPA. The fold is commutative and
//! associative, so the summary never depends on record order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::models::CourseRecord;

/// Bucket label for records without a semester tag
pub const UNASSIGNED_SEMESTER: &str = "Unassigned";

/// Derived GPA statistics for a set of course records
///
/// Recomputed on demand, never mutated in place. `gpa` is
/// `total_weighted_points / total_credits` when any credits exist,
/// otherwise 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GpaSummary {
    /// Sum of credit weights
    pub total_credits: u32,

    /// Sum of credits times grade points
    pub total_weighted_points: f64,

    /// Credit-weighted grade-point average
    pub gpa: f64,

    /// Number of records folded in
    pub course_count: usize,
}

/// Summarize a sequence of course records.
///
/// An empty sequence yields the all-zero summary; this is a defined result,
/// not an error.
pub fn summarize<'a, I>(courses: I) -> GpaSummary
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut total_credits: u32 = 0;
    let mut total_weighted_points = 0.0;
    let mut course_count = 0;

    for course in courses {
        total_credits += course.credits;
        total_weighted_points += f64::from(course.credits) * course.grade_points;
        course_count += 1;
    }

    let gpa = if total_credits > 0 {
        total_weighted_points / f64::from(total_credits)
    } else {
        0.0
    };

    GpaSummary {
        total_credits,
        total_weighted_points,
        gpa,
        course_count,
    }
}

/// Summarize records grouped by their semester tag.
///
/// Records without a tag are grouped under [`UNASSIGNED_SEMESTER`]. Buckets
/// come back in lexicographic semester order.
pub fn by_semester(courses: &[CourseRecord]) -> BTreeMap<String, GpaSummary> {
    let mut groups: BTreeMap<&str, Vec<&CourseRecord>> = BTreeMap::new();

    for course in courses {
        let semester = course.semester.as_deref().unwrap_or(UNASSIGNED_SEMESTER);
        groups.entry(semester).or_default().push(course);
    }

    groups
        .into_iter()
        .map(|(semester, records)| (semester.to_string(), summarize(records)))
        .collect()
}
