//! CLI command handlers for `campus-gpa`.

pub mod config;
pub mod gpa;
pub mod plan;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use campus_gpa::config::Config;
use campus_gpa::core::roster::{parse_roster_csv, Roster};

/// Resolve the roster path for a command: the explicit argument wins,
/// otherwise the config `roster` default.
pub(crate) fn resolve_roster_path(roster: Option<&Path>, config: &Config) -> Option<PathBuf> {
    roster.map(Path::to_path_buf).or_else(|| {
        if config.paths.roster.is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.paths.roster))
        }
    })
}

/// Load a roster file and print every row issue it contains.
///
/// Invalid rows are reported inline and skipped; only a file-level failure
/// (unreadable file, missing columns) aborts the command.
pub(crate) fn load_roster(path: &Path) -> Result<Roster, String> {
    let roster = parse_roster_csv(path).map_err(|e| {
        format!("✗ Failed to load roster {}: {e}", path.display())
    })?;

    info!(
        "Roster loaded: {} ({} records, {} invalid rows)",
        path.display(),
        roster.records.len(),
        roster.issues.len()
    );

    for issue in &roster.issues {
        warn!("Skipped roster line {}", issue.line);
        let problems: Vec<String> = issue
            .errors
            .iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect();
        eprintln!(
            "✗ Line {} skipped: {}",
            issue.line,
            problems.join("; ")
        );
    }

    Ok(roster)
}
