//! Report command handler

use std::path::{Path, PathBuf};

use tracing::{error, info};

use campus_gpa::config::Config;
use campus_gpa::core::planner::plan;
use campus_gpa::core::report::{MarkdownReporter, ReportContext};
use campus_gpa::core::summary::{by_semester, summarize};

/// Run the report command: render a Markdown transcript report for a
/// roster, optionally including a target-GPA planning section.
pub fn run(
    roster: Option<&Path>,
    output: Option<&Path>,
    planning_input: Option<(f64, f64)>,
    config: &Config,
) {
    let Some(path) = super::resolve_roster_path(roster, config) else {
        eprintln!("✗ No roster file given and no default roster configured.");
        return;
    };

    let roster = match super::load_roster(&path) {
        Ok(roster) => roster,
        Err(err) => {
            error!("Report command failed: {err}");
            eprintln!("{err}");
            return;
        }
    };

    let summary = summarize(&roster.records);
    let semesters = by_semester(&roster.records);

    let planning = planning_input.and_then(|(target, remaining)| {
        let result = plan(&summary, target, remaining);
        if result.is_none() {
            eprintln!(
                "✗ Planning section skipped: target must be 0.0-4.0 and remaining credits above 0."
            );
        }
        result
    });

    let output_path = match output {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            if let Err(e) = std::fs::create_dir_all(&reports_dir) {
                eprintln!(
                    "✗ Failed to create reports directory {}: {e}",
                    reports_dir.display()
                );
                return;
            }

            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("roster");
            reports_dir.join(format!("{stem}_report.md"))
        }
    };

    let roster_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster");

    let ctx = ReportContext {
        roster_name,
        records: &roster.records,
        summary: &summary,
        semesters: &semesters,
        planning: planning.as_ref(),
        display: &config.display,
    };

    match MarkdownReporter::new().generate(&ctx, &output_path) {
        Ok(()) => {
            println!("✓ Report generated: {}", output_path.display());
            info!("Report written to: {}", output_path.display());
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ Failed to write report to {}: {e}", output_path.display());
        }
    }
}
