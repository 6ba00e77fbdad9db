//! Core data types for the course catalog.
//!
//! - [`CourseId`]: A normalized (trimmed, uppercased) course identifier
//! - [`Course`]: One course with its title and prerequisite ids
//! - [`CourseSummary`]: The `(id, title)` pair used when listing
//!
//! [`CourseId`]: types::CourseId
//! [`Course`]: course::Course
//! [`CourseSummary`]: course::CourseSummary

pub mod course;
pub mod types;
