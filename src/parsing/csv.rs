use tracing::debug;

use crate::core::course::Course;
use crate::core::types::CourseId;
use crate::utils::validation::DELIMITER;

/// Parse one line of course data: `id, title[, prereq ...]`
///
/// Returns `None` when the line should be skipped: blank lines, lines with an
/// empty id field, and lines with nothing after the id's delimiter (no title
/// field). Empty prerequisite fields (e.g. from trailing delimiters) are
/// dropped.
pub fn parse_line(line: &str) -> Option<Course> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (id_field, rest) = line.split_once(DELIMITER)?;
    let id = CourseId::new(id_field);
    if id.is_empty() || rest.is_empty() {
        return None;
    }

    let mut fields = rest.split(DELIMITER);
    let title = fields.next().unwrap_or_default().trim().to_string();

    let prerequisites = fields
        .map(CourseId::new)
        .filter(|prereq| !prereq.is_empty())
        .collect();

    Some(Course {
        id,
        title,
        prerequisites,
    })
}

/// What a single numbered line of course data turned into
#[derive(Debug)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    Record(Course),
    /// Non-blank but not a valid course
    Skipped,
}

/// Classify one line of a course data source. `line_num` is 1-based and only
/// used for logging skipped lines.
pub fn classify_line(line: &str, line_num: usize) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Blank;
    }

    match parse_line(line) {
        Some(course) => LineOutcome::Record(course),
        None => {
            debug!("Skipping malformed line {}: '{}'", line_num, line.trim());
            LineOutcome::Skipped
        }
    }
}

/// Result of parsing a whole block of course data
#[derive(Debug, Default)]
pub struct ParsedLines {
    /// Parsed courses in source order (duplicates not yet resolved)
    pub records: Vec<Course>,

    /// 1-based line numbers of non-blank lines that produced no course
    pub skipped: Vec<usize>,
}

/// Parse every line of `text`, keeping track of the lines that were skipped.
pub fn parse_text(text: &str) -> ParsedLines {
    let mut parsed = ParsedLines::default();

    for (i, line) in text.lines().enumerate() {
        match classify_line(line, i + 1) {
            LineOutcome::Blank => {}
            LineOutcome::Record(course) => parsed.records.push(course),
            LineOutcome::Skipped => parsed.skipped.push(i + 1),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(course: &Course) -> Vec<&str> {
        course.prerequisites.iter().map(CourseId::as_str).collect()
    }

    #[test]
    fn test_parse_line_with_prerequisites() {
        let course = parse_line("cs300, Software Design, cs200, cs101").unwrap();
        assert_eq!(course.id.as_str(), "CS300");
        assert_eq!(course.title, "Software Design");
        assert_eq!(ids(&course), vec!["CS200", "CS101"]);
    }

    #[test]
    fn test_parse_line_preserves_title_case() {
        let course = parse_line("  math201 ,  Discrete MATHematics  ").unwrap();
        assert_eq!(course.id.as_str(), "MATH201");
        assert_eq!(course.title, "Discrete MATHematics");
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn test_parse_line_skips_blank() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
    }

    #[test]
    fn test_parse_line_skips_missing_title() {
        assert!(parse_line("CSCI100").is_none());
        assert!(parse_line("CSCI100,").is_none());
    }

    #[test]
    fn test_parse_line_skips_empty_id() {
        assert!(parse_line(",,").is_none());
        assert!(parse_line(" , Orphan Title, CS100").is_none());
    }

    #[test]
    fn test_parse_line_accepts_empty_title() {
        let course = parse_line("CS100, ,CS050").unwrap();
        assert_eq!(course.id.as_str(), "CS100");
        assert_eq!(course.title, "");
        assert_eq!(ids(&course), vec!["CS050"]);
    }

    #[test]
    fn test_parse_line_drops_empty_prerequisites() {
        let course = parse_line("CS400, Capstone, cs300,, ,cs200,").unwrap();
        assert_eq!(ids(&course), vec!["CS300", "CS200"]);
    }

    #[test]
    fn test_parse_line_keeps_duplicate_prerequisites() {
        let course = parse_line("CS400, Capstone, cs300, CS300, cs100").unwrap();
        assert_eq!(ids(&course), vec!["CS300", "CS300", "CS100"]);
    }

    #[test]
    fn test_parse_line_unbounded_prerequisites() {
        let prereqs: Vec<String> = (0..50).map(|n| format!("c{n}")).collect();
        let line = format!("CS999, Everything, {}", prereqs.join(","));
        let course = parse_line(&line).unwrap();
        assert_eq!(course.prerequisites.len(), 50);
        assert_eq!(course.prerequisites[49].as_str(), "C49");
    }

    #[test]
    fn test_classify_line() {
        assert!(matches!(classify_line("  \t", 1), LineOutcome::Blank));
        assert!(matches!(classify_line("CS100", 2), LineOutcome::Skipped));
        assert!(matches!(
            classify_line("cs100, Intro", 3),
            LineOutcome::Record(course) if course.id.as_str() == "CS100"
        ));
    }

    #[test]
    fn test_parse_text_reports_skipped_lines() {
        let text = "CS100, Intro\n\nCS200\n,,\nCS300, Design, CS200\n";
        let parsed = parse_text(text);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped, vec![3, 4]);
    }
}
