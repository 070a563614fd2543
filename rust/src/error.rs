//! Error types for the curriculum engine.
//!
//! The core derivations (edges, availability, paths, recommendations, focus)
//! are total and never fail. Only parsing, mutation and explicit catalog
//! validation report errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurriculumError {
    #[error("Circular dependency detected between courses: {0:?}")]
    CircularDependency(Vec<String>),
    #[error("Course not found: {0}")]
    CourseNotFound(String),
    #[error("Unknown course status: {0}")]
    UnknownStatus(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}
