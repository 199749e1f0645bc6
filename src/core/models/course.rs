//! Completed-course record model

use serde::{Deserialize, Serialize};

use crate::core::scale;

/// A completed course with a normalized grade
///
/// Records are produced by the validator (from raw form fields) or by the
/// roster loader (from a CSV row). They are replaced whole on edit, never
/// mutated field by field, and are owned by whatever collection holds the
/// authoritative roster; the engine only borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Identifier assigned by the owning store; `None` for records that
    /// have not been persisted yet
    pub id: Option<u64>,

    /// Course code (e.g., "CSCD 101")
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit weight, a positive integer
    pub credits: u32,

    /// Normalized grade-point value in `[0.0, 4.0]`
    pub grade_points: f64,

    /// Semester the course was taken in, when known
    pub semester: Option<String>,
}

impl CourseRecord {
    /// Create a record without an identifier
    #[must_use]
    pub const fn new(code: String, title: String, credits: u32, grade_points: f64) -> Self {
        Self {
            id: None,
            code,
            title,
            credits,
            grade_points,
            semester: None,
        }
    }

    /// Attach a store-assigned identifier
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach a semester tag
    #[must_use]
    pub fn with_semester(mut self, semester: String) -> Self {
        self.semester = Some(semester);
        self
    }

    /// The letter grade for this record's points, or the points formatted
    /// to one decimal place when they fall between bands
    #[must_use]
    pub fn letter(&self) -> String {
        scale::points_to_letter(self.grade_points)
    }
}
