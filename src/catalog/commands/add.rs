use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Course;
use crate::store::CourseStore;
use crate::text::{is_none_sentinel, normalize_id, trim};
use tracing::info;

/// Adds a new course. Unlike loading, an existing identifier is never
/// overwritten, and prerequisites are resolved against the live store.
pub fn run<S, P>(store: &mut S, id: &str, title: &str, prerequisites: &[P]) -> Result<CmdResult>
where
    S: CourseStore + ?Sized,
    P: AsRef<str>,
{
    let id = check_new_id(store, id)?;

    let title = trim(title);
    if title.is_empty() {
        return Err(CatalogError::EmptyInput("Course title"));
    }

    let mut resolved = Vec::new();
    for token in prerequisites {
        let prerequisite = normalize_id(token.as_ref());
        if prerequisite.is_empty() || is_none_sentinel(&prerequisite) {
            continue;
        }
        if !store.contains(&prerequisite) {
            return Err(CatalogError::DanglingPrerequisite {
                prerequisite,
                course: id,
            });
        }
        resolved.push(prerequisite);
    }

    let course = Course::new(&id, title, resolved);
    store.insert(course.clone());
    info!(course = %course.id, "course added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Course '{}' added successfully!",
        course.id
    )));
    Ok(result.with_affected_courses(vec![course]))
}

/// Normalizes `id` and checks it is free to use. The shell calls this as soon
/// as the number is entered, before asking for the rest.
pub fn check_new_id<S: CourseStore + ?Sized>(store: &S, id: &str) -> Result<String> {
    let id = normalize_id(id);
    if id.is_empty() {
        return Err(CatalogError::EmptyInput("Course number"));
    }
    if store.contains(&id) {
        return Err(CatalogError::DuplicateIdentifier(id));
    }
    Ok(id)
}
