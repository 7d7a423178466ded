use super::CourseStore;
use crate::error::{CatalogError, Result};
use crate::model::Course;
use crate::text::normalize_id;

/// Prime bucket count used when none is configured.
pub const DEFAULT_BUCKETS: usize = 179;

/// Fixed-size hash table with chaining.
pub struct ChainedStore {
    buckets: Vec<Vec<Course>>,
    len: usize,
}

impl Default for ChainedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedStore {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_BUCKETS],
            len: 0,
        }
    }

    pub fn with_buckets(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(CatalogError::Config(
                "bucket count must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            buckets: vec![Vec::new(); count],
            len: 0,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain.
    pub fn max_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn bucket_index(&self, key: &str) -> usize {
        polynomial_hash(key) as usize % self.buckets.len()
    }
}

/// `h = h * 31 + byte` over the key bytes, wrapping at 32 bits.
pub fn polynomial_hash(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

impl CourseStore for ChainedStore {
    fn insert(&mut self, mut course: Course) {
        course.id = normalize_id(&course.id);
        let index = self.bucket_index(&course.id);
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => *existing = course,
            None => {
                bucket.push(course);
                self.len += 1;
            }
        }
    }

    fn lookup(&self, id: &str) -> Option<&Course> {
        let key = normalize_id(id);
        self.buckets[self.bucket_index(&key)]
            .iter()
            .find(|c| c.id == key)
    }

    fn remove(&mut self, id: &str) -> bool {
        let key = normalize_id(id);
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|c| c.id == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    fn all_records(&self) -> Vec<Course> {
        self.buckets.iter().flatten().cloned().collect()
    }

    fn len(&self) -> usize {
        self.len
    }
}
