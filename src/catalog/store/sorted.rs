use super::CourseStore;
use crate::model::Course;
use crate::text::normalize_id;
use std::collections::{BTreeSet, HashMap};

/// Hash map storage with a sorted key index kept alongside it.
#[derive(Default)]
pub struct SortedStore {
    courses: HashMap<String, Course>,
    keys: BTreeSet<String>,
}

impl SortedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CourseStore for SortedStore {
    fn insert(&mut self, mut course: Course) {
        course.id = normalize_id(&course.id);
        self.keys.insert(course.id.clone());
        self.courses.insert(course.id.clone(), course);
    }

    fn lookup(&self, id: &str) -> Option<&Course> {
        self.courses.get(&normalize_id(id))
    }

    fn remove(&mut self, id: &str) -> bool {
        let key = normalize_id(id);
        self.keys.remove(&key);
        self.courses.remove(&key).is_some()
    }

    /// Records in identifier order.
    fn all_records(&self) -> Vec<Course> {
        self.keys
            .iter()
            .filter_map(|k| self.courses.get(k))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_identifier_order() {
        let mut store = SortedStore::new();
        for id in ["CSCI350", "csci100", "CSCI200"] {
            store.insert(Course::new(id, "t", Vec::<String>::new()));
        }

        let ids: Vec<_> = store.all_records().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["CSCI100", "CSCI200", "CSCI350"]);
    }

    #[test]
    fn remove_drops_key_from_index() {
        let mut store = SortedStore::new();
        store.insert(Course::new("CSCI100", "Intro", Vec::<String>::new()));
        assert!(store.remove("csci100"));

        assert!(store.all_records().is_empty());
        assert_eq!(store.len(), 0);
    }
}
