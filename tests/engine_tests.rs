//! End-to-end tests for the Grade/GPA engine, exercising the public API
//! the way the CLI and a form-driven caller would.

use campus_gpa::core::grade::parse_grade_input;
use campus_gpa::core::models::CourseRecord;
use campus_gpa::core::planner::plan;
use campus_gpa::core::scale::{points_to_letter, score_to_points};
use campus_gpa::core::summary::summarize;
use campus_gpa::core::validate::{validate, CourseForm, Field, FieldError};

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
fn grade_tokens_normalize_across_all_three_forms() {
    assert_eq!(parse_grade_input("A"), Some(4.0));
    assert_eq!(parse_grade_input("B+"), Some(3.5));
    assert_eq!(parse_grade_input("f"), Some(0.0));
    assert_eq!(parse_grade_input("85"), Some(4.0));
    assert_eq!(parse_grade_input("3.7"), Some(3.7));
    assert_eq!(parse_grade_input(""), None);
    assert_eq!(parse_grade_input("xyz"), None);
    assert_eq!(parse_grade_input("-1"), None);
}

#[test]
fn the_four_point_five_boundary_case() {
    // 4.5 is above the 4.0 points boundary, so it is read as a 4.5%
    // percentage score, which falls in the F band and yields 0.0.
    assert_eq!(parse_grade_input("4.5"), Some(0.0));
    assert_eq!(score_to_points(4.5), Some(0.0));
}

#[test]
fn validated_forms_flow_into_the_aggregator() {
    let forms = [
        form("CSCD 101", "Intro CS I", "3", "A"),
        form("MATH 122", "Calculus I", "3", "C"),
    ];

    let records: Vec<CourseRecord> = forms
        .iter()
        .map(|f| validate(f).record.expect("valid form"))
        .collect();

    let summary = summarize(&records);
    assert_eq!(summary.total_credits, 6);
    assert!((summary.total_weighted_points - 18.0).abs() < f64::EPSILON);
    assert!((summary.gpa - 3.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_form_never_reaches_the_aggregator() {
    let result = validate(&form("", "CS101", "3", "A"));

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors.get(&Field::Code), Some(&FieldError::EmptyField));
    assert!(result.record.is_none());
}

#[test]
fn planning_flags_unreachable_target() {
    // 30 credits at GPA 3.0, aiming for 3.5 with 10 credits left:
    // required weighted = 3.5 * 40 - 90 = 50, average 5.0, infeasible.
    let current = summarize(&[
        CourseRecord::new("A".to_string(), "A".to_string(), 15, 3.0),
        CourseRecord::new("B".to_string(), "B".to_string(), 15, 3.0),
    ]);
    assert_eq!(current.total_credits, 30);
    assert!((current.total_weighted_points - 90.0).abs() < f64::EPSILON);

    let result = plan(&current, 3.5, 10.0).expect("plan");

    assert!((result.required_average_points - 5.0).abs() < 1e-9);
    assert!(!result.feasible);
    assert_eq!(result.suggested_letter, "A");
}

#[test]
fn out_of_range_target_yields_no_plan() {
    let current = summarize(&[]);
    assert!(plan(&current, -1.0, 10.0).is_none());
}

#[test]
fn letters_and_points_round_trip_through_the_scale() {
    for (letter, points) in [
        ("A", 4.0),
        ("B+", 3.5),
        ("B", 3.0),
        ("C+", 2.5),
        ("C", 2.0),
        ("D+", 1.5),
        ("D", 1.0),
        ("E", 0.5),
        ("F", 0.0),
    ] {
        assert_eq!(parse_grade_input(letter), Some(points), "letter {letter}");
        assert_eq!(points_to_letter(points), letter, "points {points}");
    }
}
