//! Core module: the Grade/GPA engine and its supporting layers
//!
//! The engine itself (`scale`, `grade`, `validate`, `summary`, `planner`)
//! is a set of synchronous pure functions over immutable inputs; it owns no
//! state and performs no I/O. `roster`, `report`, and `config` are the thin
//! filesystem layers the CLI drives it with.

pub mod config;
pub mod grade;
pub mod models;
pub mod planner;
pub mod report;
pub mod roster;
pub mod scale;
pub mod summary;
pub mod validate;
