//! GPA summary command handler

use std::path::Path;

use tracing::error;

use campus_gpa::config::Config;
use campus_gpa::core::summary::{by_semester, summarize};

use super::{load_roster, resolve_roster_path};

/// Run the gpa command: load a roster and print its GPA statistics.
///
/// # Arguments
/// * `roster` - Optional roster path; falls back to the configured default
/// * `config` - Configuration containing paths and display precision
/// * `verbose` - Whether to print the per-course table
/// * `semester` - Whether to print the per-semester breakdown
pub fn run(roster: Option<&Path>, config: &Config, verbose: bool, semester: bool) {
    let Some(path) = resolve_roster_path(roster, config) else {
        eprintln!("✗ No roster file given and no default roster configured.");
        return;
    };

    let roster = match load_roster(&path) {
        Ok(roster) => roster,
        Err(err) => {
            error!("GPA command failed: {err}");
            eprintln!("{err}");
            return;
        }
    };

    let summary = summarize(&roster.records);
    let gpa_decimals = usize::from(config.display.gpa_decimals);
    let points_decimals = usize::from(config.display.points_decimals);

    println!("\n=== GPA Summary ({}) ===", path.display());

    if verbose {
        println!();
        for record in &roster.records {
            println!(
                "  {:<12} {:<40} {:>2} cr  {:>4} ({:.points_decimals$} pts)",
                record.code,
                record.title,
                record.credits,
                record.letter(),
                record.grade_points,
            );
        }
    }

    println!("\nCourses:         {}", summary.course_count);
    println!("Total Credits:   {}", summary.total_credits);
    println!(
        "Weighted Points: {:.points_decimals$}",
        summary.total_weighted_points
    );
    println!("GPA:             {:.gpa_decimals$}", summary.gpa);

    if semester {
        println!("\n=== Semester Breakdown ===\n");
        for (label, group) in by_semester(&roster.records) {
            println!(
                "  {:<16} {} courses, {} credits, GPA {:.gpa_decimals$}",
                label, group.course_count, group.total_credits, group.gpa,
            );
        }
    }
}
