//! # Command Layer
//!
//! One module per catalog operation. Every command is a plain function over a
//! [`CourseStore`](crate::store::CourseStore) that returns
//! `Result<CmdResult>`: failures are [`CatalogError`](crate::error::CatalogError)
//! values, checked before anything is written, and successes carry the data the
//! caller asked for plus user-facing messages.
//!
//! Commands never prompt. Operations that need an operator decision, like
//! removing a course other courses depend on, are split into steps the caller
//! sequences itself (see [`remove`]).

use crate::loader::LoadReport;
use crate::model::Course;
use std::path::PathBuf;
use std::time::Duration;

pub mod add;
pub mod describe;
pub mod discover;
pub mod list;
pub mod load;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A course as shown by `describe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub prerequisites_line: String,
}

impl From<Course> for CourseDetail {
    fn from(course: Course) -> Self {
        let prerequisites_line = course.prerequisites_line();
        Self {
            course,
            prerequisites_line,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Courses created, deleted or rewritten by the command.
    pub affected_courses: Vec<Course>,
    pub listed_courses: Vec<Course>,
    pub detail: Option<CourseDetail>,
    /// Identifiers of courses that list the target as a prerequisite.
    pub dependents: Vec<String>,
    pub load_report: Option<LoadReport>,
    pub data_files: Vec<PathBuf>,
    /// Wall-clock time spent in the command, filled in by the API layer.
    pub elapsed: Option<Duration>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_courses(mut self, courses: Vec<Course>) -> Self {
        self.affected_courses = courses;
        self
    }

    pub fn with_listed_courses(mut self, courses: Vec<Course>) -> Self {
        self.listed_courses = courses;
        self
    }

    pub fn with_detail(mut self, detail: CourseDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_dependents(mut self, dependents: Vec<String>) -> Self {
        self.dependents = dependents;
        self
    }

    pub fn with_load_report(mut self, report: LoadReport) -> Self {
        self.load_report = Some(report);
        self
    }

    pub fn with_data_files(mut self, files: Vec<PathBuf>) -> Self {
        self.data_files = files;
        self
    }
}
