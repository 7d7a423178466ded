use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not open file '{}': {source}", .path.display())]
    IoOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} - Invalid format (missing course number or title)\nLine: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("Prerequisite '{prerequisite}' for course '{course}' does not exist in the course list.")]
    DanglingPrerequisite { prerequisite: String, course: String },

    #[error("{0} cannot be empty.")]
    EmptyInput(&'static str),

    #[error("Course {0} already exists.")]
    DuplicateIdentifier(String),

    #[error("Course '{0}' not found.")]
    NotFound(String),

    #[error("No courses loaded. Please load data first (Option 1).")]
    EmptyStore,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
