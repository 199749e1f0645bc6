//! CSV parser for course rosters
//!
//! The roster format is a plain comma-separated file with a header line
//! naming the columns `Code`, `Title`, `Credits`, `Grade`, and optionally
//! `Semester`. Columns are matched by name, case-insensitively, so their
//! order does not matter. Fields containing commas or quotes are wrapped
//! in double quotes, with embedded quotes doubled.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::models::CourseRecord;
use crate::core::validate::{validate, CourseForm, Field, FieldError};

/// Validation failures for one roster row
#[derive(Debug, Clone)]
pub struct RowIssue {
    /// 1-based line number in the roster file
    pub line: usize,

    /// Per-field failures for the row, in field order
    pub errors: BTreeMap<Field, FieldError>,
}

/// A parsed roster: the records that validated plus the rows that did not
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Records that passed validation, ids assigned by row order
    pub records: Vec<CourseRecord>,

    /// Rows that failed validation; they are reported, never fatal
    pub issues: Vec<RowIssue>,
}

/// Column positions resolved from the header line
struct Columns {
    code: usize,
    title: usize,
    credits: usize,
    grade: usize,
    semester: Option<usize>,
}

/// Parse a roster CSV file.
///
/// Every data row runs through the course validator. Rows that fail are
/// collected as [`RowIssue`]s and skipped; the remaining records get
/// sequential identifiers starting at 1.
///
/// # Errors
/// Returns an error if the file cannot be read, has no header line, or is
/// missing one of the required columns.
pub fn parse_roster_csv<P: AsRef<Path>>(path: P) -> Result<Roster, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_roster_str(&content)
}

/// Parse roster CSV content from a string. See [`parse_roster_csv`].
///
/// # Errors
/// Returns an error when the header line is missing or incomplete.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_roster_str(content: &str) -> Result<Roster, Box<dyn Error>> {
    let mut lines = content.lines().enumerate();

    let (_, header_line) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or("Roster file is empty")?;

    let columns = resolve_columns(&parse_csv_line(header_line))?;

    let mut roster = Roster::default();

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_line(line);
        let form = form_from_fields(&fields, &columns);
        let validation = validate(&form);

        if let Some(record) = validation.record {
            let id = roster.records.len() as u64 + 1;
            roster.records.push(record.with_id(id));
        } else {
            roster.issues.push(RowIssue {
                line: idx + 1,
                errors: validation.errors,
            });
        }
    }

    Ok(roster)
}

/// Write course records back out in the roster format.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_roster_csv<P: AsRef<Path>>(
    path: P,
    records: &[CourseRecord],
) -> Result<(), Box<dyn Error>> {
    let mut out = String::from("Code,Title,Credits,Grade,Semester\n");

    for record in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            escape_field(&record.code),
            escape_field(&record.title),
            record.credits,
            record.grade_points,
            escape_field(record.semester.as_deref().unwrap_or_default())
        );
    }

    fs::write(path, out)?;
    Ok(())
}

/// Quote a field when it would otherwise break the comma split
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split a CSV line into trimmed fields.
///
/// Commas inside double-quoted fields do not split; a doubled quote inside
/// a quoted field stands for a literal quote.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
        .into_iter()
        .map(|field| field.trim().to_string())
        .collect()
}

/// Resolve required and optional column positions from the header fields
fn resolve_columns(headers: &[String]) -> Result<Columns, Box<dyn Error>> {
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    };

    Ok(Columns {
        code: position("Code").ok_or("Roster is missing a 'Code' column")?,
        title: position("Title").ok_or("Roster is missing a 'Title' column")?,
        credits: position("Credits").ok_or("Roster is missing a 'Credits' column")?,
        grade: position("Grade").ok_or("Roster is missing a 'Grade' column")?,
        semester: position("Semester"),
    })
}

/// Build a raw course form from one row's fields
fn form_from_fields(fields: &[String], columns: &Columns) -> CourseForm {
    let get = |idx: usize| fields.get(idx).cloned().unwrap_or_default();

    CourseForm {
        code: get(columns.code),
        title: get(columns.title),
        credits: get(columns.credits),
        grade: get(columns.grade),
        semester: columns.semester.map(get).unwrap_or_default(),
    }
}
