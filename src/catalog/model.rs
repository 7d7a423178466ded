use crate::text::normalize_id;

/// Rendered in place of an empty prerequisite list.
pub const NO_PREREQUISITES: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    // Always uppercase; the store keys on it.
    pub id: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Builds a course, normalizing the identifier and every prerequisite.
    pub fn new<I, P>(id: &str, title: impl Into<String>, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            id: normalize_id(id),
            title: title.into(),
            prerequisites: prerequisites
                .into_iter()
                .map(|p| normalize_id(p.as_ref()))
                .collect(),
        }
    }

    pub fn requires(&self, id: &str) -> bool {
        self.prerequisites.iter().any(|p| p == id)
    }

    /// Drops every occurrence of `id` from the prerequisite list.
    /// Returns true when the list changed.
    pub fn strip_prerequisite(&mut self, id: &str) -> bool {
        let before = self.prerequisites.len();
        self.prerequisites.retain(|p| p != id);
        self.prerequisites.len() != before
    }

    pub fn prerequisites_line(&self) -> String {
        if self.prerequisites.is_empty() {
            NO_PREREQUISITES.to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }
}
