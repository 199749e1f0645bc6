//! Integration tests for roster CSV loading and saving

use campus_gpa::core::models::CourseRecord;
use campus_gpa::core::roster::{parse_roster_csv, write_roster_csv};
use campus_gpa::core::summary::summarize;
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_a_roster_file_and_summarizes_it() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("transcript.csv");

    fs::write(
        &path,
        "Code,Title,Credits,Grade,Semester\n\
         CSCD 101,Intro CS I,3,A,2024 Sem 1\n\
         MATH 122,Calculus I,3,C,2024 Sem 1\n",
    )
    .expect("write roster");

    let roster = parse_roster_csv(&path).expect("parse");

    assert_eq!(roster.records.len(), 2);
    assert!(roster.issues.is_empty());

    let summary = summarize(&roster.records);
    assert_eq!(summary.total_credits, 6);
    assert!((summary.gpa - 3.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_rows_are_reported_and_skipped() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("transcript.csv");

    fs::write(
        &path,
        "Code,Title,Credits,Grade\n\
         CSCD 101,Intro CS I,3,A\n\
         UGRC 110,Academic Writing,three,A\n",
    )
    .expect("write roster");

    let roster = parse_roster_csv(&path).expect("parse");

    assert_eq!(roster.records.len(), 1);
    assert_eq!(roster.issues.len(), 1);
    assert_eq!(roster.issues[0].line, 3);
}

#[test]
fn missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("does_not_exist.csv");

    assert!(parse_roster_csv(&path).is_err());
}

#[test]
fn write_then_load_preserves_records() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("saved.csv");

    let records = vec![
        CourseRecord::new("CSCD 101".to_string(), "Intro CS I".to_string(), 3, 4.0)
            .with_semester("2024 Sem 1".to_string()),
        CourseRecord::new("STAT 101".to_string(), "Intro Statistics".to_string(), 3, 3.5),
    ];

    write_roster_csv(&path, &records).expect("write");
    let loaded = parse_roster_csv(&path).expect("parse");

    assert!(loaded.issues.is_empty());
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[0].code, "CSCD 101");
    assert_eq!(loaded.records[0].semester.as_deref(), Some("2024 Sem 1"));
    // Grade points are written numerically and survive the round trip
    assert!((loaded.records[1].grade_points - 3.5).abs() < f64::EPSILON);
    assert!(loaded.records[1].semester.is_none());
}

#[test]
fn titles_with_commas_survive_the_round_trip() {
    use campus_gpa::core::validate::{validate, CourseForm};

    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("saved.csv");

    // The validator accepts commas in free-text fields, so the writer has
    // to quote them or the reader misaligns the columns.
    let form = CourseForm {
        code: "CSCD 201".to_string(),
        title: "Algorithms, Part I".to_string(),
        credits: "3".to_string(),
        grade: "A".to_string(),
        semester: "2024, Sem 1".to_string(),
    };
    let record = validate(&form).record.expect("valid record");

    write_roster_csv(&path, &[record]).expect("write");
    let loaded = parse_roster_csv(&path).expect("parse");

    assert!(loaded.issues.is_empty());
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].title, "Algorithms, Part I");
    assert_eq!(loaded.records[0].semester.as_deref(), Some("2024, Sem 1"));
    assert_eq!(loaded.records[0].credits, 3);
}
