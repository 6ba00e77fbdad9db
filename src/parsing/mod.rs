//! Parser for course data files.
//!
//! Course data is plain text with one course per line and comma-separated
//! fields. There is no header row and no quoting.
//!
//! | Field | Meaning | Normalization |
//! |-------|---------|---------------|
//! | 1     | Course id | trimmed, uppercased |
//! | 2     | Title | trimmed, case preserved |
//! | 3..   | Prerequisite ids | trimmed, uppercased, empty fields dropped |
//!
//! ## Example
//!
//! ```rust
//! use course_planner::parsing::csv::parse_line;
//!
//! let course = parse_line("cs300, Software Design, cs200, cs101").unwrap();
//! assert_eq!(course.id.as_str(), "CS300");
//! assert_eq!(course.prerequisites.len(), 2);
//!
//! assert!(parse_line("CS100").is_none());
//! ```

pub mod csv;
