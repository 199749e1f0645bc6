//! Course form validation
//!
//! Validates the raw string fields of a prospective or edited course entry
//! and produces a normalized [`CourseRecord`] when every field passes. All
//! fields are checked independently so callers can flag every problem at
//! once; nothing short-circuits on the first failure.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::core::grade::parse_grade_input;
use crate::core::models::CourseRecord;

/// A validated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// Course code
    Code,
    /// Course title
    Title,
    /// Credit count
    Credits,
    /// Grade token
    Grade,
}

impl Field {
    /// Field name as it appears in forms and CSV headers
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Title => "title",
            Self::Credits => "credits",
            Self::Grade => "grade",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was blank after trimming
    #[error("required field is empty")]
    EmptyField,

    /// A numeric field could not be parsed
    #[error("value is not a number")]
    NotANumber,

    /// The value parsed but is not a positive integer
    #[error("value must be a positive integer")]
    NotPositiveInteger,

    /// The grade token matched neither a letter, a points value, nor a
    /// valid percentage score
    #[error("enter a letter (A, B+, ...), a score 0-100, or points 0.0-4.0")]
    UnrecognizedGrade,
}

/// Raw string fields of a course entry, as they arrive from a form or a
/// CSV row
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Credit count, unparsed
    pub credits: String,
    /// Grade token, unparsed
    pub grade: String,
    /// Optional semester tag, never validated
    pub semester: String,
}

/// Outcome of validating a [`CourseForm`]
#[derive(Debug, Clone)]
pub struct Validation {
    /// Per-field failures, in field order
    pub errors: BTreeMap<Field, FieldError>,
    /// The normalized record; present exactly when `errors` is empty
    pub record: Option<CourseRecord>,
}

impl Validation {
    /// Whether the form passed validation
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a course form and normalize it into a [`CourseRecord`].
///
/// Pure function: no side effects, no partial records. When any field
/// fails, `record` is `None` and callers must not submit the entry to the
/// aggregator.
#[must_use]
pub fn validate(form: &CourseForm) -> Validation {
    let mut errors = BTreeMap::new();

    if form.code.trim().is_empty() {
        errors.insert(Field::Code, FieldError::EmptyField);
    }
    if form.title.trim().is_empty() {
        errors.insert(Field::Title, FieldError::EmptyField);
    }

    let credits = parse_credits(form.credits.trim()).map_err(|err| {
        errors.insert(Field::Credits, err);
    });

    let grade_points = if form.grade.trim().is_empty() {
        errors.insert(Field::Grade, FieldError::EmptyField);
        None
    } else if let Some(points) = parse_grade_input(&form.grade) {
        Some(points)
    } else {
        errors.insert(Field::Grade, FieldError::UnrecognizedGrade);
        None
    };

    let record = match (credits, grade_points) {
        (Ok(credits), Some(grade_points)) if errors.is_empty() => {
            let mut record = CourseRecord::new(
                form.code.trim().to_string(),
                form.title.trim().to_string(),
                credits,
                grade_points,
            );
            let semester = form.semester.trim();
            if !semester.is_empty() {
                record = record.with_semester(semester.to_string());
            }
            Some(record)
        }
        _ => None,
    };

    Validation { errors, record }
}

/// Parse a credits field into a positive integer.
///
/// Accepts anything that parses as a number, then requires it to be an
/// integer greater than zero, mirroring the two-stage error reporting of
/// the form ("not a number" vs "not a positive integer").
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_credits(raw: &str) -> Result<u32, FieldError> {
    let value: f64 = raw.parse().map_err(|_| FieldError::NotANumber)?;

    if value > 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(FieldError::NotPositiveInteger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str, title: &str, credits: &str, grade: &str) -> CourseForm {
        CourseForm {
            code: code.to_string(),
            title: title.to_string(),
            credits: credits.to_string(),
            grade: grade.to_string(),
            semester: String::new(),
        }
    }

    #[test]
    fn valid_form_produces_record() {
        let result = validate(&form("CSCD 101", "Intro CS I", "3", "A"));

        assert!(result.is_ok());
        let record = result.record.expect("record");
        assert_eq!(record.code, "CSCD 101");
        assert_eq!(record.credits, 3);
        assert!((record.grade_points - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_code_is_the_only_error() {
        let result = validate(&form("", "CS101", "3", "A"));

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors.get(&Field::Code), Some(&FieldError::EmptyField));
        assert!(result.record.is_none());
    }

    #[test]
    fn all_failing_fields_reported_together() {
        let result = validate(&form("", "", "abc", "zz"));

        assert_eq!(result.errors.len(), 4);
        assert_eq!(result.errors.get(&Field::Code), Some(&FieldError::EmptyField));
        assert_eq!(result.errors.get(&Field::Title), Some(&FieldError::EmptyField));
        assert_eq!(
            result.errors.get(&Field::Credits),
            Some(&FieldError::NotANumber)
        );
        assert_eq!(
            result.errors.get(&Field::Grade),
            Some(&FieldError::UnrecognizedGrade)
        );
    }

    #[test]
    fn credits_must_be_a_positive_integer() {
        for bad in ["0", "-3", "2.5", "1e10"] {
            let result = validate(&form("C", "T", bad, "A"));
            assert_eq!(
                result.errors.get(&Field::Credits),
                Some(&FieldError::NotPositiveInteger),
                "credits {bad:?}"
            );
        }

        let result = validate(&form("C", "T", "", "A"));
        assert_eq!(result.errors.get(&Field::Credits), Some(&FieldError::NotANumber));
    }

    #[test]
    fn blank_grade_reports_empty_not_unrecognized() {
        let result = validate(&form("C", "T", "3", "  "));
        assert_eq!(result.errors.get(&Field::Grade), Some(&FieldError::EmptyField));
    }

    #[test]
    fn grade_accepts_all_three_input_forms() {
        for (token, expected) in [("b+", 3.5), ("3.7", 3.7), ("85", 4.0)] {
            let result = validate(&form("C", "T", "3", token));
            let record = result.record.expect("record");
            assert!((record.grade_points - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn semester_is_optional_and_trimmed() {
        let mut with_semester = form("C", "T", "3", "A");
        with_semester.semester = " 2024 Sem 2 ".to_string();

        let record = validate(&with_semester).record.expect("record");
        assert_eq!(record.semester.as_deref(), Some("2024 Sem 2"));

        let record = validate(&form("C", "T", "3", "A")).record.expect("record");
        assert!(record.semester.is_none());
    }
}
