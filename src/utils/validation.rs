//! Centralized normalization helpers.

/// Field delimiter used by course data files.
pub const DELIMITER: char = ',';

/// Normalize a course identifier: trim surrounding whitespace and uppercase.
///
/// Applied identically to ids and prerequisite ids at load time and to
/// user input at query time, so lookups are case and whitespace insensitive.
///
/// # Examples
///
/// ```
/// use course_planner::utils::validation::normalize_id;
///
/// assert_eq!(normalize_id("  cs300 "), "CS300");
/// assert_eq!(normalize_id("CS300"), "CS300");
/// assert_eq!(normalize_id("   "), "");
/// ```
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
