//! Transcript report generation
//!
//! Renders a Markdown report for a roster: the GPA summary, the per-course
//! table, a semester breakdown, the grading scale reference, and an
//! optional target-GPA planning section. Reports render well in GitHub,
//! GitLab, and VS Code.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::config::DisplayConfig;
use crate::core::models::CourseRecord;
use crate::core::planner::PlanningResult;
use crate::core::scale::GRADE_SCALE;
use crate::core::summary::GpaSummary;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("templates/report.md");

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Display name for the roster (usually the file stem)
    pub roster_name: &'a str,

    /// The records the report covers
    pub records: &'a [CourseRecord],

    /// Overall GPA statistics
    pub summary: &'a GpaSummary,

    /// Per-semester GPA statistics
    pub semesters: &'a BTreeMap<String, GpaSummary>,

    /// Planning result to include, when the user supplied a target
    pub planning: Option<&'a PlanningResult>,

    /// Decimal precision for GPA and point values
    pub display: &'a DisplayConfig,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[must_use]
    pub fn render(&self, ctx: &ReportContext<'_>) -> String {
        let gpa_decimals = usize::from(ctx.display.gpa_decimals);
        let points_decimals = usize::from(ctx.display.points_decimals);

        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{roster_name}}", ctx.roster_name);
        output = output.replace("{{course_count}}", &ctx.summary.course_count.to_string());
        output = output.replace("{{total_credits}}", &ctx.summary.total_credits.to_string());
        output = output.replace(
            "{{total_weighted_points}}",
            &format!("{:.points_decimals$}", ctx.summary.total_weighted_points),
        );
        output = output.replace("{{gpa}}", &format!("{:.gpa_decimals$}", ctx.summary.gpa));

        output = output.replace(
            "{{course_table}}",
            &Self::course_table(ctx.records, points_decimals),
        );
        output = output.replace(
            "{{semester_table}}",
            &Self::semester_table(ctx.semesters, gpa_decimals),
        );
        output = output.replace(
            "{{planner_section}}",
            &Self::planner_section(ctx.planning, gpa_decimals),
        );
        output = output.replace("{{scale_table}}", &Self::scale_table(points_decimals));

        output
    }

    /// Render the report and write it to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn generate(
        &self,
        ctx: &ReportContext<'_>,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render(ctx))?;
        Ok(())
    }

    fn course_table(records: &[CourseRecord], points_decimals: usize) -> String {
        if records.is_empty() {
            return "_No completed courses recorded._".to_string();
        }

        let mut table = String::from("| Code | Title | Credits | Grade | Points | Semester |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        for record in records {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.points_decimals$} | {} |",
                record.code,
                record.title,
                record.credits,
                record.letter(),
                record.grade_points,
                record.semester.as_deref().unwrap_or("-")
            );
        }

        table
    }

    fn semester_table(semesters: &BTreeMap<String, GpaSummary>, gpa_decimals: usize) -> String {
        if semesters.is_empty() {
            return "_No semester data._".to_string();
        }

        let mut table = String::from("| Semester | Courses | Credits | GPA |\n");
        table.push_str("|---|---|---|---|\n");

        for (semester, summary) in semesters {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.gpa_decimals$} |",
                semester, summary.course_count, summary.total_credits, summary.gpa
            );
        }

        table
    }

    fn planner_section(planning: Option<&PlanningResult>, gpa_decimals: usize) -> String {
        let Some(result) = planning else {
            return String::new();
        };

        let verdict = if result.feasible {
            "achievable within the 0.0-4.0 scale"
        } else {
            "not achievable within the 0.0-4.0 scale"
        };

        format!(
            "## Target GPA Plan\n\n\
             To reach a cumulative GPA of **{:.gpa_decimals$}** over the remaining \
             **{:.0}** credits,\n\
             an average of **{:.gpa_decimals$}** grade points per credit is required \
             (suggested grade: **{}**).\n\n\
             This target is **{verdict}**.\n",
            result.target_gpa,
            result.remaining_credits,
            result.required_average_points,
            result.suggested_letter,
        )
    }

    fn scale_table(points_decimals: usize) -> String {
        let mut table = String::new();
        for band in &GRADE_SCALE {
            let _ = writeln!(
                table,
                "| {} | {:.0}-{:.0} | {:.points_decimals$} |",
                band.letter, band.min_score, band.max_score, band.points
            );
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planner::plan;
    use crate::core::summary::{by_semester, summarize};

    fn sample_records() -> Vec<CourseRecord> {
        vec![
            CourseRecord::new("CSCD 101".to_string(), "Intro CS I".to_string(), 3, 4.0)
                .with_semester("2024 Sem 1".to_string()),
            CourseRecord::new("MATH 122".to_string(), "Calculus I".to_string(), 3, 2.0),
        ]
    }

    #[test]
    fn renders_summary_and_tables() {
        let records = sample_records();
        let summary = summarize(&records);
        let semesters = by_semester(&records);

        let rendered = MarkdownReporter::new().render(&ReportContext {
            roster_name: "transcript",
            records: &records,
            summary: &summary,
            semesters: &semesters,
            planning: None,
            display: &DisplayConfig::default(),
        });

        assert!(rendered.contains("# Transcript Report: transcript"));
        assert!(rendered.contains("| **GPA** | **3.00** |"));
        assert!(rendered.contains("| CSCD 101 | Intro CS I | 3 | A | 4.0 | 2024 Sem 1 |"));
        assert!(rendered.contains("| Unassigned | 1 | 3 | 2.00 |"));
        // No planner input, no planner section
        assert!(!rendered.contains("Target GPA Plan"));
        // No leftover placeholders
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn includes_planner_section_when_present() {
        let records = sample_records();
        let summary = summarize(&records);
        let semesters = by_semester(&records);
        let planning = plan(&summary, 3.5, 6.0).expect("plan");

        let rendered = MarkdownReporter::new().render(&ReportContext {
            roster_name: "transcript",
            records: &records,
            summary: &summary,
            semesters: &semesters,
            planning: Some(&planning),
            display: &DisplayConfig::default(),
        });

        assert!(rendered.contains("## Target GPA Plan"));
        assert!(rendered.contains("**3.50**"));
    }

    #[test]
    fn honors_configured_display_precision() {
        let records = sample_records();
        let summary = summarize(&records);
        let semesters = by_semester(&records);
        let display = DisplayConfig {
            gpa_decimals: 3,
            points_decimals: 2,
        };

        let rendered = MarkdownReporter::new().render(&ReportContext {
            roster_name: "transcript",
            records: &records,
            summary: &summary,
            semesters: &semesters,
            planning: None,
            display: &display,
        });

        assert!(rendered.contains("| **GPA** | **3.000** |"));
        assert!(rendered.contains("| CSCD 101 | Intro CS I | 3 | A | 4.00 | 2024 Sem 1 |"));
        assert!(rendered.contains("| Unassigned | 1 | 3 | 2.000 |"));
    }

    #[test]
    fn empty_roster_renders_placeholders() {
        let records = Vec::new();
        let summary = summarize(&records);
        let semesters = BTreeMap::new();

        let rendered = MarkdownReporter::new().render(&ReportContext {
            roster_name: "empty",
            records: &records,
            summary: &summary,
            semesters: &semesters,
            planning: None,
            display: &DisplayConfig::default(),
        });

        assert!(rendered.contains("_No completed courses recorded._"));
        assert!(rendered.contains("| **GPA** | **0.00** |"));
    }
}
