//! Shared library for `campus-gpa`
//! Contains the Grade/GPA engine and support layers used by the CLI

pub mod core;

pub use crate::core::config;

/// Returns the current version of the `campus-gpa` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
