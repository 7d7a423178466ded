use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::store::CourseStore;

/// All courses ordered by identifier.
pub fn run<S: CourseStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let mut courses = store.all_records();
    if courses.is_empty() {
        return Err(CatalogError::EmptyStore);
    }

    courses.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(CmdResult::default().with_listed_courses(courses))
}
