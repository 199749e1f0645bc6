//! Roster file handling
//!
//! Loads and saves the authoritative set of a user's completed courses as a
//! CSV roster file.

pub mod csv_parser;

pub use csv_parser::{parse_roster_csv, write_roster_csv, Roster, RowIssue};
