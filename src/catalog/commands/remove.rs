//! Removing a course is three separate calls so the caller can ask the
//! operator between them:
//!
//! 1. [`plan`] finds the course and every course that depends on it.
//! 2. [`run`] deletes the course and nothing else.
//! 3. [`cleanup`] strips the removed identifier from remaining prerequisite
//!    lists.
//!
//! Stopping after step 2 is allowed and leaves dangling prerequisite
//! references behind.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::CourseStore;
use crate::text::normalize_id;
use tracing::{debug, info};

/// Looks the course up and collects its dependents without changing anything.
pub fn plan<S: CourseStore + ?Sized>(store: &S, id: &str) -> Result<CmdResult> {
    let key = required_id(id)?;
    let course = store
        .lookup(&key)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(key.clone()))?;

    let dependents = dependents_of(store, &key);

    let mut result = CmdResult::default();
    if !dependents.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "WARNING: {} is a prerequisite for:",
            key
        )));
    }
    Ok(result
        .with_affected_courses(vec![course])
        .with_dependents(dependents))
}

/// Deletes the course. Other courses' prerequisite lists are left alone.
pub fn run<S: CourseStore + ?Sized>(store: &mut S, id: &str) -> Result<CmdResult> {
    let key = required_id(id)?;
    let course = store
        .lookup(&key)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(key.clone()))?;

    store.remove(&key);
    info!(course = %key, "course removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Course {} removed successfully.",
        key
    )));
    Ok(result.with_affected_courses(vec![course]))
}

/// Strips `id` from every prerequisite list that mentions it and writes back
/// only the courses that changed.
pub fn cleanup<S: CourseStore + ?Sized>(store: &mut S, id: &str) -> Result<CmdResult> {
    let key = required_id(id)?;

    let mut rewritten = Vec::new();
    for mut course in store.all_records() {
        if course.strip_prerequisite(&key) {
            debug!(course = %course.id, removed = %key, "rewrote prerequisites");
            store.insert(course.clone());
            rewritten.push(course);
        }
    }
    rewritten.sort_by(|a, b| a.id.cmp(&b.id));

    let mut result = CmdResult::default();
    if rewritten.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No courses referenced {} as a prerequisite.",
            key
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Prerequisite cleanup completed ({} course(s) updated).",
            rewritten.len()
        )));
    }
    Ok(result.with_affected_courses(rewritten))
}

/// Sorted identifiers of courses listing `id` as a prerequisite.
pub fn dependents_of<S: CourseStore + ?Sized>(store: &S, id: &str) -> Vec<String> {
    let mut dependents: Vec<String> = store
        .all_records()
        .into_iter()
        .filter(|c| c.requires(id))
        .map(|c| c.id)
        .collect();
    dependents.sort();
    dependents
}

fn required_id(id: &str) -> Result<String> {
    let key = normalize_id(id);
    if key.is_empty() {
        return Err(CatalogError::EmptyInput("Course number"));
    }
    Ok(key)
}
