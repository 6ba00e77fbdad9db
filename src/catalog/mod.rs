//! Course catalog storage and indexing.
//!
//! The catalog keeps every course keyed by its normalized id, plus a sorted
//! index of those ids for ordered listing. A catalog starts empty and is
//! replaced wholesale by each successful load.
//!
//! ## Example
//!
//! ```rust,no_run
//! use course_planner::catalog::store::{CourseCatalog, Listing, Lookup};
//! use std::path::Path;
//!
//! let mut catalog = CourseCatalog::new();
//! catalog.load(Path::new("courses.csv")).unwrap();
//!
//! if let Listing::Courses(courses) = catalog.list_all() {
//!     for course in courses {
//!         println!("{}, {}", course.id, course.title);
//!     }
//! }
//!
//! match catalog.get("csci400") {
//!     Lookup::Found(course) => println!("{}", course.prerequisites_display()),
//!     Lookup::NotFound(id) => println!("{id} not found"),
//!     Lookup::NoData => println!("nothing loaded"),
//! }
//! ```

pub mod index;
pub mod store;
