//! Data models for `campus-gpa`

pub mod course;

pub use course::CourseRecord;
