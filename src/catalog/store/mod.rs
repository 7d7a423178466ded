//! # Storage Layer
//!
//! The [`CourseStore`] trait is the only way the rest of the crate touches
//! course records. Commands and the API are generic over it.
//!
//! ## Implementations
//!
//! - [`chained::ChainedStore`]: the default. A fixed number of buckets (a prime,
//!   179 unless configured otherwise), a base-31 polynomial string hash, and
//!   chaining inside each bucket. The table never grows, so very skewed key sets
//!   degrade towards linear scans; catalogs of a few hundred courses stay well
//!   within one or two entries per bucket.
//!
//! - [`sorted::SortedStore`]: a `HashMap` paired with a `BTreeSet` of keys, so
//!   `all_records` comes back already in identifier order.
//!
//! ## Ownership
//!
//! A store owns every record it holds. `lookup` hands out a borrow tied to the
//! store, so any mutation invalidates it and callers must look the course up
//! again afterwards.
//!
//! ## Keys
//!
//! Identifiers are normalized (trimmed, uppercased) on the way in, for both
//! `insert` and every query method, which makes lookups case-insensitive.

use crate::model::Course;
use serde::{Deserialize, Serialize};

pub mod chained;
pub mod sorted;

pub use chained::ChainedStore;
pub use sorted::SortedStore;

/// Abstract interface for course storage.
pub trait CourseStore {
    /// Add a course, replacing any course stored under the same identifier.
    fn insert(&mut self, course: Course);

    /// Find a course by identifier.
    fn lookup(&self, id: &str) -> Option<&Course>;

    /// Delete a course. Returns whether anything was removed.
    fn remove(&mut self, id: &str) -> bool;

    /// Snapshot of every stored course.
    fn all_records(&self) -> Vec<Course>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

impl<S: CourseStore + ?Sized> CourseStore for Box<S> {
    fn insert(&mut self, course: Course) {
        (**self).insert(course)
    }

    fn lookup(&self, id: &str) -> Option<&Course> {
        (**self).lookup(id)
    }

    fn remove(&mut self, id: &str) -> bool {
        (**self).remove(id)
    }

    fn all_records(&self) -> Vec<Course> {
        (**self).all_records()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Which store implementation a session runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Chained,
    Sorted,
}

impl StoreBackend {
    /// Builds an empty store. `bucket_count` only applies to the chained backend.
    pub fn build(self, bucket_count: usize) -> crate::error::Result<Box<dyn CourseStore>> {
        match self {
            StoreBackend::Chained => Ok(Box::new(ChainedStore::with_buckets(bucket_count)?)),
            StoreBackend::Sorted => Ok(Box::new(SortedStore::new())),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Chained => write!(f, "chained"),
            StoreBackend::Sorted => write!(f, "sorted"),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: ChainedStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ChainedStore::new(),
            }
        }

        pub fn with_course(mut self, id: &str, title: &str, prerequisites: &[&str]) -> Self {
            self.store.insert(Course::new(id, title, prerequisites.iter().copied()));
            self
        }

        /// A small catalog with a three-level prerequisite chain:
        /// CSCI100 <- CSCI200 <- CSCI300, MATH201 <- CSCI300, CSCI100 <- CSCI350.
        pub fn with_sample_catalog(self) -> Self {
            self.with_course("CSCI100", "Introduction to Computer Science", &[])
                .with_course("MATH201", "Discrete Mathematics", &[])
                .with_course("CSCI200", "Data Structures", &["CSCI100"])
                .with_course("CSCI300", "Introduction to Algorithms", &["CSCI200", "MATH201"])
                .with_course("CSCI350", "Operating Systems", &["CSCI100"])
        }
    }
}
