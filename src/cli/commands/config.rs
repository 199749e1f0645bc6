//! `config` subcommand: inspect and edit the persisted CLI settings
//!
//! The keys cover logging, the default roster and reports directory, and
//! GPA display precision. Edits are written straight back to the config
//! file; `reset` deletes it after a confirmation prompt.

use crate::args::ConfigSubcommand;
use campus_gpa::config::{Config, KNOWN_KEYS};
use std::io::{self, BufRead, Write};

/// Dispatch a `config` subcommand. Exits with status 1 on failure.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            print!("{config}");
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_after_confirmation(),
    };

    if let Err(message) = outcome {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn show_key(config: &Config, key: &str) -> Result<(), String> {
    config.get(key).map_or_else(
        || {
            Err(format!(
                "Unknown config key: '{key}'. Valid keys: {}",
                KNOWN_KEYS.join(", ")
            ))
        },
        |value| {
            println!("{key} = {value}");
            Ok(())
        },
    )
}

fn set_key(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    println!("✓ {key} set to '{value}'");
    if key == "roster" {
        println!("  Commands without a FILE argument will now use this roster.");
    }
    Ok(())
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    let restored = config.get(key).unwrap_or_default();
    println!("✓ {key} restored to its default ('{restored}')");
    Ok(())
}

fn reset_after_confirmation() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!(
        "Resetting deletes the saved settings; the default roster, reports \
         directory, and display precision all revert. Continue? (y/n): "
    );
    io::stdout().flush().ok();

    if !confirmed(io::stdin().lock()) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Read one line and interpret it as a yes/no answer; anything but an
/// explicit yes declines.
fn confirmed(mut input: impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
