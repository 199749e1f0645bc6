//! CLI argument definitions for `campus-gpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_gpa::config::ConfigOverrides;

/// CLI log level argument
///
/// Log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `tracing::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for tracing::Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `roster`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute GPA statistics for a course roster.
    ///
    /// Loads a roster CSV, reports any invalid rows, and prints the
    /// credit-weighted GPA summary.
    Gpa {
        /// Path to the roster CSV file (falls back to config `roster`)
        #[arg(value_name = "FILE")]
        roster: Option<PathBuf>,

        /// Also print a per-semester breakdown
        #[arg(long)]
        semester: bool,
    },
    /// Plan toward a target cumulative GPA.
    ///
    /// Computes the average grade-point performance required over the
    /// remaining credits and whether it is achievable.
    Plan {
        /// Path to the roster CSV file (falls back to config `roster`)
        #[arg(value_name = "FILE")]
        roster: Option<PathBuf>,

        /// Target cumulative GPA (0.0 - 4.0)
        #[arg(short, long, value_name = "GPA")]
        target: f64,

        /// Credits still to be taken
        #[arg(short, long, value_name = "CREDITS")]
        remaining: f64,
    },
    /// Generate a Markdown transcript report from a roster.
    Report {
        /// Path to the roster CSV file (falls back to config `roster`)
        #[arg(value_name = "FILE")]
        roster: Option<PathBuf>,

        /// Output file path (defaults to `<reports_dir>/<roster>_report.md`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include a planning section for this target cumulative GPA
        #[arg(short, long, value_name = "GPA", requires = "remaining")]
        target: Option<f64>,

        /// Remaining credits for the planning section
        #[arg(short, long, value_name = "CREDITS", requires = "target")]
        remaining: Option<f64>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusgpa",
    about = "campus-gpa command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand for --log-level debug)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config default roster path
    #[arg(long = "config-roster", value_name = "FILE")]
    pub config_roster: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over their
    /// long-form counterparts (e.g., `--config-reports-dir`) when both are
    /// provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            roster: self
                .config_roster
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
