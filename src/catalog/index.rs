use std::collections::HashMap;

use crate::core::types::CourseId;

/// Ascending list of every key in the catalog, used for ordered enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedIndex {
    ids: Vec<CourseId>,
}

impl SortedIndex {
    /// Build the index from the keys of `by_id`
    pub fn build<V>(by_id: &HashMap<CourseId, V>) -> Self {
        let mut ids: Vec<CourseId> = by_id.keys().cloned().collect();
        ids.sort_unstable();
        Self { ids }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorts_keys() {
        let mut by_id = HashMap::new();
        for raw in ["MATH201", "CSCI400", "CSCI100", "CSCI101"] {
            by_id.insert(CourseId::new(raw), ());
        }

        let index = SortedIndex::build(&by_id);
        let ids: Vec<&str> = index.iter().map(CourseId::as_str).collect();
        assert_eq!(ids, vec!["CSCI100", "CSCI101", "CSCI400", "MATH201"]);
    }

    #[test]
    fn test_build_empty() {
        let by_id: HashMap<CourseId, ()> = HashMap::new();
        assert!(SortedIndex::build(&by_id).is_empty());
    }
}
