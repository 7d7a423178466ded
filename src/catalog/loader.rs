//! # Catalog Loader
//!
//! Turns a delimited data file into courses in three separate passes:
//!
//! 1. **Parse** every non-blank line into a candidate [`Course`].
//! 2. **Validate** that each candidate's prerequisites name another candidate
//!    from the same file.
//! 3. **Commit** the candidates into the store.
//!
//! Nothing reaches the store until the first two passes have succeeded for the
//! whole file, so a failed load leaves the store exactly as it was. A
//! successful load is additive: courses already in the store stay, and
//! identifiers present in both are overwritten by the file's version.
//!
//! ## Line Format
//!
//! ```text
//! CSCI300, Introduction to Algorithms, CSCI200, MATH201
//! ```
//!
//! Identifier, title, then zero or more prerequisite identifiers. Fields are
//! trimmed, identifiers uppercased, empty prerequisite fields ignored.

use crate::error::{CatalogError, Result};
use crate::model::Course;
use crate::store::CourseStore;
use crate::text::{split_fields, trim, DELIMITER};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: String,
    /// Non-blank lines parsed into candidates.
    pub parsed: usize,
    /// Distinct identifiers written to the store.
    pub committed: usize,
}

/// Loads the file at `path` into `store`.
pub fn load_path<S: CourseStore + ?Sized>(store: &mut S, path: &Path) -> Result<LoadReport> {
    let file = File::open(path).map_err(|source| CatalogError::IoOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    load_reader(store, BufReader::new(file), source)
}

/// Loads from any buffered reader. `source` names the input in the report.
pub fn load_reader<S, R>(store: &mut S, reader: R, source: impl Into<String>) -> Result<LoadReport>
where
    S: CourseStore + ?Sized,
    R: BufRead,
{
    let source = source.into();
    let candidates = parse(reader)?;
    validate(&candidates).inspect_err(|e| warn!(%source, "rejected catalog: {e}"))?;

    let parsed = candidates.len();
    let committed = commit(store, candidates);
    info!(%source, parsed, committed, "catalog loaded");

    Ok(LoadReport {
        source,
        parsed,
        committed,
    })
}

/// Parses every line into a candidate course without touching any store.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Course>> {
    let mut candidates = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(course) = parse_line(&line, index + 1)? {
            candidates.push(course);
        }
    }

    debug!(count = candidates.len(), "parsed candidate courses");
    Ok(candidates)
}

/// `Ok(None)` for blank lines.
fn parse_line(line: &str, line_number: usize) -> Result<Option<Course>> {
    if trim(line).is_empty() {
        return Ok(None);
    }

    let tokens = split_fields(line, DELIMITER);
    let malformed = || CatalogError::MalformedLine {
        line: line_number,
        content: line.to_string(),
    };

    let (id, title, rest) = match tokens.as_slice() {
        [id, title, rest @ ..] => (id, title, rest),
        _ => return Err(malformed()),
    };
    if id.is_empty() || title.is_empty() {
        return Err(malformed());
    }

    let prerequisites = rest.iter().filter(|t| !t.is_empty());
    Ok(Some(Course::new(id, title.clone(), prerequisites)))
}

/// Checks that every prerequisite names a candidate in the same batch.
pub fn validate(candidates: &[Course]) -> Result<()> {
    let known: HashSet<&str> = candidates.iter().map(|c| c.id.as_str()).collect();

    for course in candidates {
        if let Some(missing) = course
            .prerequisites
            .iter()
            .find(|p| !known.contains(p.as_str()))
        {
            return Err(CatalogError::DanglingPrerequisite {
                prerequisite: missing.clone(),
                course: course.id.clone(),
            });
        }
    }
    Ok(())
}

/// Writes validated candidates in file order; later duplicates win.
/// Returns how many distinct identifiers were written.
fn commit<S: CourseStore + ?Sized>(store: &mut S, candidates: Vec<Course>) -> usize {
    let distinct: HashSet<String> = candidates.iter().map(|c| c.id.clone()).collect();
    for course in candidates {
        store.insert(course);
    }
    distinct.len()
}
