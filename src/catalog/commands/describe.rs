use crate::commands::{CmdResult, CourseDetail};
use crate::error::{CatalogError, Result};
use crate::store::CourseStore;
use crate::text::{normalize_id, trim};

pub fn run<S: CourseStore + ?Sized>(store: &S, query: &str) -> Result<CmdResult> {
    let trimmed = trim(query);
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyInput("Course number"));
    }

    let course = store
        .lookup(&normalize_id(trimmed))
        .ok_or_else(|| CatalogError::NotFound(trimmed.to_string()))?;

    Ok(CmdResult::default().with_detail(CourseDetail::from(course.clone())))
}
