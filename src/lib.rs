//! # course-planner
//!
//! Load a course catalog from a comma-delimited text file and answer two
//! questions about it: what courses exist (in sorted order), and what a given
//! course is called and requires.
//!
//! Each line of the data file holds one course:
//!
//! ```text
//! CSCI400, Large Software Development, CSCI301, CSCI350
//! ```
//!
//! The first field is the course id, the second its title, and every further
//! field a prerequisite id. Ids are trimmed and uppercased everywhere, so
//! lookups ignore case and surrounding whitespace.
//!
//! ## Example
//!
//! ```rust
//! use course_planner::{CourseCatalog, Lookup};
//!
//! let (catalog, _summary) = CourseCatalog::from_text(
//!     "cs300, Software Design, cs200, cs101\ncs200, Data Structures\n",
//! );
//!
//! let Lookup::Found(course) = catalog.get(" CS300 ") else {
//!     panic!("CS300 should be in the catalog");
//! };
//! assert_eq!(course.title, "Software Design");
//! assert_eq!(course.prerequisites_display(), "CS200, CS101");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Course catalog storage and the sorted index
//! - [`core`]: Core data types for courses and ids
//! - [`parsing`]: Parser for course data lines
//! - [`cli`]: Command-line interface and interactive menu

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, CourseCatalog, Listing, LoadSummary, Lookup};
pub use core::course::{Course, CourseSummary};
pub use core::types::CourseId;
