//! Command-line interface entry point for `campus-gpa`

mod args;
mod commands;

use args::{Cli, Command};
use campus_gpa::config::Config;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: CLI flag overrides config; otherwise use
    // config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(tracing::Level::from)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(tracing::Level::WARN);

    if args.debug_flag {
        level = tracing::Level::DEBUG;
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.as_ref().or(config_log_path.as_ref());

    init_tracing(level, log_path, verbose);

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Gpa { roster, semester } => {
            commands::gpa::run(roster.as_deref(), &config, verbose, semester);
        }
        Command::Plan {
            roster,
            target,
            remaining,
        } => {
            commands::plan::run(roster.as_deref(), target, remaining, &config);
        }
        Command::Report {
            roster,
            output,
            target,
            remaining,
        } => {
            commands::report::run(
                roster.as_deref(),
                output.as_deref(),
                target.zip(remaining),
                &config,
            );
        }
    }
}

/// Initialize the tracing subscriber, writing either to stderr or to the
/// requested log file.
fn init_tracing(level: tracing::Level, log_path: Option<&std::path::PathBuf>, verbose: bool) {
    let make_filter = move || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
    };

    if let Some(path) = log_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(make_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file))
                    .init();

                if verbose {
                    eprintln!("✓ File logging initialized at: {}", path.display());
                } else {
                    info!("File logging initialized at: {}", path.display());
                }
                return;
            }
            Err(err) => {
                eprintln!(
                    "✗ Failed to initialize file logging at {}: {err}",
                    path.display()
                );
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_level(val: &str) -> Option<tracing::Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        _ => None,
    }
}
