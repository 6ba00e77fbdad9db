use serde::{Deserialize, Serialize};

use crate::utils::validation::normalize_id;

/// Normalized course identifier (trimmed, uppercased).
///
/// The only way to build one is through [`CourseId::new`], which normalizes,
/// so two ids compare equal exactly when their normalized forms do.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_id(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_normalizes() {
        let id = CourseId::new("  csci400 ");
        assert_eq!(id.as_str(), "CSCI400");
        assert_eq!(id, CourseId::new("CSCI400"));
        assert_eq!(id.to_string(), "CSCI400");
    }

    #[test]
    fn test_course_id_orders_lexicographically() {
        let mut ids = vec![
            CourseId::new("math201"),
            CourseId::new("CSCI400"),
            CourseId::new("csci100"),
        ];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(CourseId::as_str).collect();
        assert_eq!(ids, vec!["CSCI100", "CSCI400", "MATH201"]);
    }

    #[test]
    fn test_course_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&CourseId::new("cs300")).unwrap();
        assert_eq!(json, "\"CS300\"");
    }
}
