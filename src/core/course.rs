use serde::{Deserialize, Serialize};

use crate::core::types::CourseId;

/// A single course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique, normalized identifier
    pub id: CourseId,

    /// Human-readable title, case preserved
    pub title: String,

    /// Prerequisite ids in source order. Duplicates are kept and the ids are
    /// not checked against the catalog.
    #[serde(default)]
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(id: &str, title: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(id),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prerequisites<'a>(mut self, prerequisites: impl IntoIterator<Item = &'a str>) -> Self {
        self.prerequisites = prerequisites.into_iter().map(CourseId::new).collect();
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Prerequisites joined with `", "`, or `"None"` when there are none.
    pub fn prerequisites_display(&self) -> String {
        if self.has_prerequisites() {
            self.prerequisites
                .iter()
                .map(CourseId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            "None".to_string()
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

/// The `(id, title)` pair produced when listing the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_display() {
        let course = Course::new("cs300", "Software Design").with_prerequisites(["cs200", "cs101"]);
        assert_eq!(course.prerequisites_display(), "CS200, CS101");

        let course = Course::new("cs101", "Intro");
        assert!(!course.has_prerequisites());
        assert_eq!(course.prerequisites_display(), "None");
    }

    #[test]
    fn test_summary() {
        let course = Course::new("cs300", "Software Design");
        let summary = course.summary();
        assert_eq!(summary.id.as_str(), "CS300");
        assert_eq!(summary.title, "Software Design");
    }
}
