//! Configuration module for `campus-gpa`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Canonical spellings of the keys [`Config::get`], [`Config::set`], and
/// [`Config::unset`] accept. Hyphenated variants of the underscored keys
/// are accepted too.
pub const KNOWN_KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "reports_dir",
    "roster",
    "gpa_decimals",
    "points_decimals",
];

fn unknown_key_error(key: &str) -> String {
    format!(
        "Unknown config key: '{key}'. Valid keys: {}",
        KNOWN_KEYS.join(", ")
    )
}

const fn default_gpa_decimals() -> u8 {
    2
}

const fn default_points_decimals() -> u8 {
    1
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated report files
    #[serde(default)]
    pub reports_dir: String,
    /// Default roster CSV used when a command omits its roster argument
    #[serde(default)]
    pub roster: String,
}

/// Display formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places when printing GPA values
    #[serde(default = "default_gpa_decimals")]
    pub gpa_decimals: u8,
    /// Decimal places when printing weighted point totals
    #[serde(default = "default_points_decimals")]
    pub points_decimals: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gpa_decimals: default_gpa_decimals(),
            points_decimals: default_points_decimals(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Display formatting settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override default roster path
    pub roster: Option<String>,
}

impl Config {
    /// Get the `$CAMPUS_GPA` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusgpa`
    /// - macOS: `~/Library/Application Support/campusgpa`
    /// - Windows: `%APPDATA%\campusgpa`
    #[must_use]
    pub fn get_campusgpa_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusgpa")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that fields added in newer
    /// versions pick up their default values. Only string fields that are
    /// empty here and non-empty in the defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }
        if self.paths.roster.is_empty() && !defaults.paths.roster.is_empty() {
            self.paths.roster.clone_from(&defaults.paths.roster);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Lets command-line arguments override configuration file values for
    /// one run without modifying the persistent file. Only non-`None`
    /// values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(roster) = &overrides.roster {
            self.paths.roster.clone_from(roster);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusgpa_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_GPA` in a string to the actual config directory,
    /// so configuration values can reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CAMPUS_GPA") {
            let campusgpa_dir = Self::get_campusgpa_dir();
            value.replace("$CAMPUS_GPA", campusgpa_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$CAMPUS_GPA`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.roster = Self::expand_variables(&config.paths.roster);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: `DefaultCLIConfigDebug.toml`
    /// - Release: `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   the defaults, and saves the updated config.
    /// - On first run: creates the config directory and writes the default
    ///   config.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform-specific config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`, `roster`,
    /// `gpa_decimals`, `points_decimals`.
    ///
    /// # Returns
    /// - `Some(String)`: the configuration value as a string
    /// - `None`: if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "roster" => Some(self.paths.roster.clone()),
            "gpa_decimals" | "gpa-decimals" => Some(self.display.gpa_decimals.to_string()),
            "points_decimals" | "points-decimals" => {
                Some(self.display.points_decimals.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed (e.g., "maybe" for the verbose boolean).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "roster" => self.paths.roster = value.to_string(),
            "gpa_decimals" | "gpa-decimals" => {
                self.display.gpa_decimals = value
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid decimal count for 'gpa_decimals': '{value}'"))?;
            }
            "points_decimals" | "points-decimals" => {
                self.display.points_decimals = value.parse::<u8>().map_err(|_| {
                    format!("Invalid decimal count for 'points_decimals': '{value}'")
                })?;
            }
            _ => return Err(unknown_key_error(key)),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "roster" => self.paths.roster.clone_from(&defaults.paths.roster),
            "gpa_decimals" | "gpa-decimals" => {
                self.display.gpa_decimals = defaults.display.gpa_decimals;
            }
            "points_decimals" | "points-decimals" => {
                self.display.points_decimals = defaults.display.points_decimals;
            }
            _ => return Err(unknown_key_error(key)),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, so the next
    /// [`load()`](Config::load) recreates it from defaults. Destructive;
    /// the CLI asks for confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  roster = \"{}\"", self.paths.roster)?;

        writeln!(f, "\n[display]")?;
        writeln!(f, "  gpa_decimals = {}", self.display.gpa_decimals)?;
        writeln!(f, "  points_decimals = {}", self.display.points_decimals)?;

        Ok(())
    }
}
