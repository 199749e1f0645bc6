//! Target-GPA planner command handler

use std::path::Path;

use tracing::error;

use campus_gpa::config::Config;
use campus_gpa::core::planner::plan;
use campus_gpa::core::summary::summarize;

/// Run the plan command: solve for the performance needed to reach a
/// target cumulative GPA.
///
/// Out-of-range target or remaining-credit values are insufficient input,
/// not an error: the command prints a notice and exits cleanly, matching
/// the engine's "no planning panel" behavior.
pub fn run(roster: Option<&Path>, target: f64, remaining: f64, config: &Config) {
    let Some(path) = super::resolve_roster_path(roster, config) else {
        eprintln!("✗ No roster file given and no default roster configured.");
        return;
    };

    let roster = match super::load_roster(&path) {
        Ok(roster) => roster,
        Err(err) => {
            error!("Plan command failed: {err}");
            eprintln!("{err}");
            return;
        }
    };

    let summary = summarize(&roster.records);
    let gpa_decimals = usize::from(config.display.gpa_decimals);

    let Some(result) = plan(&summary, target, remaining) else {
        println!(
            "Planning needs a target GPA between 0.0 and 4.0 and remaining credits above 0."
        );
        return;
    };

    println!("\n=== Target GPA Plan ({}) ===\n", path.display());
    println!("Current GPA:      {:.gpa_decimals$}", summary.gpa);
    println!("Target GPA:       {:.gpa_decimals$}", result.target_gpa);
    println!("Remaining Credits: {:.0}", result.remaining_credits);
    println!(
        "Required Average: {:.gpa_decimals$} (suggested grade: {})",
        result.required_average_points, result.suggested_letter
    );

    if result.feasible {
        println!("✓ Achievable within the 0.0-4.0 scale");
    } else {
        println!("✗ Not achievable within the 0.0-4.0 scale");
    }
}
